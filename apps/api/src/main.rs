mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod plans;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::plans::dataset::CmsDataset;
use crate::plans::fetcher::PlanFetcher;
use crate::recommend::parser::LineScriptParser;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MAI Copilot API v{}", env!("CARGO_PKG_VERSION"));

    // Plan finder dataset
    let dataset = CmsDataset::new(
        config.cms_endpoint.clone(),
        config.cms_app_token.clone(),
        config.cms_page_limit,
    );
    if config.cms_app_token.is_none() {
        info!("CMS_APP_TOKEN not set; dataset requests will be anonymous");
    }
    info!(
        "Plan dataset: {} (page limit {})",
        config.cms_endpoint, config.cms_page_limit
    );

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_api_url.clone(),
        config.openai_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    // Build app state
    let state = AppState {
        plan_fetcher: PlanFetcher::new(Arc::new(dataset)),
        llm,
        script_parser: Arc::new(LineScriptParser),
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
