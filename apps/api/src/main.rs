mod ats;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::extraction::PdfTextExtractor;
use crate::ats::scorer::Scorer;
use crate::ats::suggestions::GeminiSuggestionGenerator;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let profile = config.load_profile()?;
    info!(
        "ATS profile loaded: {} keywords, {} sections",
        profile.keywords.len(),
        profile.sections.len()
    );

    // The LLM client itself is built on the first upload.
    if config.gemini_api_key.is_none() {
        info!("GEMINI_API_KEY not set; uploads will receive the fallback suggestion");
    }
    let suggester = Arc::new(GeminiSuggestionGenerator::new(config.gemini_api_key.clone()));

    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(Scorer::new(profile)),
        extractor: Arc::new(PdfTextExtractor),
        suggester,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
