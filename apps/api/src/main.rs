mod analysis;
mod auth;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod tailoring;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tailoring::keyword_source::{ExtractedKeywordSource, KeywordSource, LlmKeywordSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Local extraction by default; LLM_KEYWORD_EXTRACTION swaps in the model
    let keyword_source: Arc<dyn KeywordSource> = if config.llm_keyword_extraction {
        info!("Keyword source: LLM (local extraction as fallback)");
        Arc::new(LlmKeywordSource(llm.clone()))
    } else {
        info!("Keyword source: local extraction");
        Arc::new(ExtractedKeywordSource)
    };

    if config.access_tokens.is_empty() {
        info!("No ACCESS_TOKENS configured; every tailoring response is a preview");
    }

    let state = AppState {
        llm,
        config: config.clone(),
        keyword_source,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
