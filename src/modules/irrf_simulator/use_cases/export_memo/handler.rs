use crate::modules::irrf_simulator::core::ports::MemoPrinter;
use crate::modules::irrf_simulator::core::row::RowId;
use crate::modules::irrf_simulator::core::row_store::{RowStoreError, SharedRowStore};
use crate::modules::irrf_simulator::use_cases::export_memo::render::{MEMO_TITLE, render_memo};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrintMemoError {
    #[error(transparent)]
    Row(#[from] RowStoreError),

    #[error("no printer configured")]
    NoPrinter,
}

pub struct ExportMemoHandler {
    store: SharedRowStore,
    printer: Option<Arc<dyn MemoPrinter>>,
}

impl ExportMemoHandler {
    pub fn new(store: SharedRowStore, printer: Option<Arc<dyn MemoPrinter>>) -> Self {
        Self { store, printer }
    }

    /// `Ok(None)` when the row exists but has nothing to export yet.
    pub async fn handle(&self, id: RowId) -> Result<Option<String>, RowStoreError> {
        let store = self.store.read().await;
        let row = store.get(id).ok_or(RowStoreError::NotFound(id))?;
        Ok(render_memo(row))
    }

    /// Hands the memo to the printer in the background. Print failures are
    /// logged by the job, never returned.
    pub async fn print(&self, id: RowId) -> Result<Option<JoinHandle<()>>, PrintMemoError> {
        let Some(document) = self.handle(id).await? else {
            return Ok(None);
        };
        let printer = self.printer.clone().ok_or(PrintMemoError::NoPrinter)?;

        Ok(Some(tokio::spawn(async move {
            match printer.print(MEMO_TITLE, &document).await {
                Ok(()) => info!(row = id, "memo sent to printer"),
                Err(err) => warn!(row = id, %err, "memo could not be printed"),
            }
        })))
    }
}
