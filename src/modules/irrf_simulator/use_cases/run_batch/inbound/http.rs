use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::irrf_simulator::use_cases::list_rows::projection::{RowView, project_all};
use crate::modules::irrf_simulator::use_cases::run_batch::handler::BatchSummary;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RunBatchResponse {
    pub summary: BatchSummary,
    pub rows: Vec<RowView>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let summary = state.run_batch_handler.handle().await;
    let rows = project_all(&*state.store.read().await);
    Json(RunBatchResponse { summary, rows })
}
