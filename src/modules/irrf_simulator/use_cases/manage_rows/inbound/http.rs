use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::irrf_simulator::core::row::RowId;
use crate::modules::irrf_simulator::use_cases::manage_rows::command::UpdateRow;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct AddRowResponse {
    pub id: RowId,
}

#[derive(Serialize)]
pub struct RemoveRowResponse {
    pub removed: bool,
}

pub async fn add(State(state): State<AppState>) -> impl IntoResponse {
    let id = state.rows_handler.add_row().await;
    (StatusCode::CREATED, Json(AddRowResponse { id }))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<RowId>) -> impl IntoResponse {
    let removed = state.rows_handler.remove_row(id).await;
    Json(RemoveRowResponse { removed })
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<RowId>,
    body: Result<Json<UpdateRow>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.rows_handler.update_row(id, command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
