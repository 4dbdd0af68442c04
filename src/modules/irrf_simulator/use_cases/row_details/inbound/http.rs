use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::irrf_simulator::core::row::RowId;
use crate::modules::irrf_simulator::use_cases::row_details::projection::find;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<RowId>) -> impl IntoResponse {
    let store = state.store.read().await;
    match find(&store, id) {
        Ok(Some(details)) => Json(details).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
