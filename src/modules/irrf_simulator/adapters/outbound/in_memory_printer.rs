// In memory implementation of the MemoPrinter port. Keeps every printed memo.

use crate::modules::irrf_simulator::core::ports::{MemoPrinter, PrintError};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedMemo {
    pub title: String,
    pub document: String,
}

#[derive(Default)]
pub struct InMemoryPrinter {
    pub printed: Mutex<Vec<PrintedMemo>>,
    offline: bool,
}

impl InMemoryPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait::async_trait]
impl MemoPrinter for InMemoryPrinter {
    async fn print(&self, title: &str, document: &str) -> Result<(), PrintError> {
        if self.offline {
            return Err(PrintError::Unavailable("Printer offline".into()));
        }
        self.printed.lock().await.push(PrintedMemo {
            title: title.to_string(),
            document: document.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_printer_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_printed_memos() {
        let printer = InMemoryPrinter::new();
        printer.print("memo", "<html></html>").await.unwrap();
        let printed = printer.printed.lock().await;
        assert_eq!(
            *printed,
            vec![PrintedMemo {
                title: "memo".into(),
                document: "<html></html>".into()
            }]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut printer = InMemoryPrinter::new();
        printer.toggle_offline();
        let result = printer.print("memo", "<html></html>").await;
        assert!(matches!(result, Err(PrintError::Unavailable(_))));
        assert!(printer.printed.lock().await.is_empty());
    }
}
