use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::irrf_simulator::use_cases::run_batch::handler::BatchSummary;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone, Copy)]
pub struct GqlBatchSummary {
    pub computed: i64,
    pub failed: i64,
    pub skipped: i64,
    pub dropped: i64,
}

impl From<BatchSummary> for GqlBatchSummary {
    fn from(s: BatchSummary) -> Self {
        Self {
            computed: s.computed as i64,
            failed: s.failed as i64,
            skipped: s.skipped as i64,
            dropped: s.dropped as i64,
        }
    }
}

#[derive(Default)]
pub struct RunBatchMutation;

#[Object]
impl RunBatchMutation {
    async fn run_batch(&self, context: &Context<'_>) -> GqlResult<GqlBatchSummary> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.run_batch_handler.handle().await.into())
    }
}
