use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use irrf_batch::modules::irrf_simulator::adapters::outbound::command_printer::CommandPrinter;
use irrf_batch::modules::irrf_simulator::adapters::outbound::http_calculator::HttpIrrfCalculator;
use irrf_batch::modules::irrf_simulator::core::ports::MemoPrinter;
use irrf_batch::shell::config::AppConfig;
use irrf_batch::shell::graphql::{AppSchema, schema};
use irrf_batch::shell::http::router;
use irrf_batch::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let calculator = Arc::new(HttpIrrfCalculator::new(
        config.api_base.clone(),
        config.request_timeout,
    )?);
    let printer = config
        .print_command
        .as_deref()
        .and_then(CommandPrinter::parse)
        .map(|printer| Arc::new(printer) as Arc<dyn MemoPrinter>);
    if printer.is_none() {
        tracing::info!("no print command configured; memos are served for browser printing only");
    }

    let state = AppState::new(calculator, printer);
    let app = router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(calculator = %config.api_base, "IRRF service configured");
    tracing::info!("HTTP endpoint: http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
