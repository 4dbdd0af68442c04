// Ports describe what the simulator needs from the outside world.
//
// - IrrfCalculator: the remote service that owns the tax rules.
// - MemoPrinter: the platform facility that prints a rendered memo.
//
// Adapters implement these traits; in memory versions back the tests.

use crate::modules::irrf_simulator::core::irrf_result::IrrfResult;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Body of one computation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IrrfRequest {
    pub salario_bruto: f64,
    pub dependentes: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// The service answered and refused the request.
    #[error("service rejected the request: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// No usable answer: connection failure, timeout or malformed payload.
    #[error("transport failure: {0}")]
    Transport(String),
}

#[async_trait]
pub trait IrrfCalculator: Send + Sync {
    async fn calculate(&self, request: IrrfRequest) -> Result<IrrfResult, CalculatorError>;
}

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("printer unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait MemoPrinter: Send + Sync {
    async fn print(&self, title: &str, document: &str) -> Result<(), PrintError>;
}
