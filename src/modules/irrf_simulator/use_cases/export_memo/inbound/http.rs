use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::modules::irrf_simulator::core::row::RowId;
use crate::modules::irrf_simulator::use_cases::export_memo::handler::PrintMemoError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<RowId>) -> impl IntoResponse {
    match state.export_memo_handler.handle(id).await {
        Ok(Some(document)) => Html(document).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn print(State(state): State<AppState>, Path(id): Path<RowId>) -> impl IntoResponse {
    match state.export_memo_handler.print(id).await {
        Ok(Some(_job)) => StatusCode::ACCEPTED.into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(PrintMemoError::Row(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(err @ PrintMemoError::NoPrinter) => {
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string()).into_response()
        }
    }
}
