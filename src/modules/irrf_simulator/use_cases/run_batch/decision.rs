use crate::modules::irrf_simulator::core::ports::IrrfRequest;

/// Shown when the service refuses a row without saying why.
pub const FALLBACK_REJECTION: &str = "Calculation failed";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RowError {
    #[error("Invalid salary")]
    InvalidSalary,

    #[error("{0}")]
    ServiceRejected(String),

    #[error("No connection")]
    NoConnection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowDecision {
    /// Nothing was typed in; clear the row without calling the service.
    Skip,
    Rejected { reason: RowError },
    Dispatch { request: IrrfRequest },
}
