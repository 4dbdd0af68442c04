use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::irrf_simulator::use_cases::list_rows::projection::project_all;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(project_all(&store))
}
