// Batch run over every row of the store.
//
// Rows are visited in the order captured when the run starts; each row's text
// is read at the moment it is visited. Calls to the calculator are strictly
// sequential and the run lock keeps two runs from interleaving. Outcomes are
// published in a single write to the store once every row has been visited.

use crate::modules::irrf_simulator::core::ports::{CalculatorError, IrrfCalculator};
use crate::modules::irrf_simulator::core::row::{Row, RowId, RowOutcome};
use crate::modules::irrf_simulator::core::row_store::SharedRowStore;
use crate::modules::irrf_simulator::use_cases::run_batch::decide::decide_row;
use crate::modules::irrf_simulator::use_cases::run_batch::decision::{
    FALLBACK_REJECTION, RowDecision, RowError,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub computed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Rows removed from the store while the run was in flight.
    pub dropped: usize,
}

pub struct RunBatchHandler<TCalculator>
where
    TCalculator: IrrfCalculator + ?Sized + 'static,
{
    store: SharedRowStore,
    calculator: Arc<TCalculator>,
    run_lock: Mutex<()>,
}

impl<TCalculator> RunBatchHandler<TCalculator>
where
    TCalculator: IrrfCalculator + ?Sized + 'static,
{
    pub fn new(store: SharedRowStore, calculator: Arc<TCalculator>) -> Self {
        Self {
            store,
            calculator,
            run_lock: Mutex::new(()),
        }
    }

    pub async fn handle(&self) -> BatchSummary {
        let _run = self.run_lock.lock().await;
        let ids = self.store.read().await.ids();
        info!(rows = ids.len(), "batch run started");

        let mut summary = BatchSummary::default();
        let mut outcomes: Vec<(RowId, RowOutcome)> = Vec::with_capacity(ids.len());
        for id in ids {
            let row = {
                let store = self.store.read().await;
                store.get(id).cloned()
            };
            let Some(row) = row else {
                summary.dropped += 1;
                continue;
            };
            let outcome = self.process(&row).await;
            match &outcome {
                RowOutcome::Cleared => summary.skipped += 1,
                RowOutcome::Computed(_) => summary.computed += 1,
                RowOutcome::Failed(_) => summary.failed += 1,
            }
            outcomes.push((id, outcome));
        }

        let report = self.store.write().await.merge_outcomes(outcomes);
        summary.dropped += report.dropped;
        info!(
            computed = summary.computed,
            failed = summary.failed,
            skipped = summary.skipped,
            dropped = summary.dropped,
            "batch run finished"
        );
        summary
    }

    async fn process(&self, row: &Row) -> RowOutcome {
        let request = match decide_row(row) {
            RowDecision::Skip => {
                debug!(row = row.id, "blank row skipped");
                return RowOutcome::Cleared;
            }
            RowDecision::Rejected { reason } => {
                debug!(row = row.id, %reason, "row rejected before dispatch");
                return RowOutcome::Failed(reason.to_string());
            }
            RowDecision::Dispatch { request } => request,
        };

        match self.calculator.calculate(request).await {
            Ok(mut result) => {
                // The count actually sent stays with the result, whatever the row says later.
                result.dependentes.get_or_insert(request.dependentes);
                debug!(row = row.id, base = result.base(), "row computed");
                RowOutcome::Computed(result)
            }
            Err(CalculatorError::Rejected { message }) => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_REJECTION.to_string());
                debug!(row = row.id, %message, "service rejected row");
                RowOutcome::Failed(RowError::ServiceRejected(message).to_string())
            }
            Err(CalculatorError::Transport(cause)) => {
                warn!(row = row.id, %cause, "calculator unreachable");
                RowOutcome::Failed(RowError::NoConnection.to_string())
            }
        }
    }
}
