mod config;
mod dashboard;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dashboard::store::RecordStore;
use crate::extraction::entities::HttpSpanLabeler;
use crate::extraction::skills::SkillVocabulary;
use crate::routes::build_router;
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

    info!("Starting Sifter API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary
    let vocabulary = match &config.skills_path {
        Some(path) => SkillVocabulary::from_file(path)?,
        None => SkillVocabulary::builtin(),
    };
    info!("Skill vocabulary loaded ({} terms)", vocabulary.len());

    // Initialize the span labeler and probe it. An unavailable recognizer is
    // fatal: the process reports it and halts rather than retrying per-document.
    let labeler = HttpSpanLabeler::new(config.recognizer_url.clone());
    labeler
        .probe()
        .await
        .context("Entity recognizer failed its startup probe")?;
    info!("Recognizer reachable at {}", config.recognizer_url);

    // Build app state
    let state = AppState {
        vocabulary: Arc::new(vocabulary),
        labeler: Arc::new(labeler),
        store: RecordStore::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
