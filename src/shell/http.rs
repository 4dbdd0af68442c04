use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::irrf_simulator::use_cases::export_memo::inbound::http as memo_http;
use crate::modules::irrf_simulator::use_cases::list_rows::inbound::http as list_http;
use crate::modules::irrf_simulator::use_cases::manage_rows::inbound::http as rows_http;
use crate::modules::irrf_simulator::use_cases::row_details::inbound::http as details_http;
use crate::modules::irrf_simulator::use_cases::run_batch::inbound::http as run_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rows", get(list_http::handle).post(rows_http::add))
        .route(
            "/rows/{id}",
            get(details_http::handle)
                .patch(rows_http::update)
                .delete(rows_http::remove),
        )
        .route("/rows/{id}/memo", get(memo_http::handle))
        .route("/rows/{id}/memo/print", post(memo_http::print))
        .route("/batch-runs", post(run_http::handle))
        .with_state(state)
}
