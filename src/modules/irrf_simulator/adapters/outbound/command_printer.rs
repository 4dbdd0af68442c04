// MemoPrinter that pipes the rendered document into a system print command
// such as `lp` or `lpr`. The command line is split on whitespace; the memo
// title is exported as MEMO_TITLE for commands that want it.

use crate::modules::irrf_simulator::core::ports::{MemoPrinter, PrintError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct CommandPrinter {
    program: String,
    args: Vec<String>,
}

impl CommandPrinter {
    /// Returns `None` for an empty command line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl MemoPrinter for CommandPrinter {
    async fn print(&self, title: &str, document: &str) -> Result<(), PrintError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("MEMO_TITLE", title)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            // A command that exits early closes the pipe; its status tells the story.
            if let Err(err) = stdin.write_all(document.as_bytes()).await {
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(err.into());
                }
            }
        }
        let status = child.wait().await?;
        if !status.success() {
            return Err(PrintError::Unavailable(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}
