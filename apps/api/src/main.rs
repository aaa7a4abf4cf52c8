mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod segmentation;
mod state;
mod tailoring;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::llm_client::{LlmClient, Rewriter};
use crate::routes::build_router;
use crate::segmentation::HeadingVocabulary;
use crate::state::AppState;

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

    // Heading vocabularies are fixed for the life of the process
    let headings = HeadingVocabulary::with_extras(
        &config.extra_experience_headings,
        &config.extra_other_headings,
    )?;
    info!(
        "Heading vocabulary: {} experience, {} other",
        headings.experience().len(),
        headings.other().len()
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_settings())?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?}, retries: {})",
        llm.model(),
        config.llm_timeout,
        config.llm_max_retries
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(PdfTextExtractor),
        rewriter: Arc::new(llm),
        headings: Arc::new(headings),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
