mod config;
mod content;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::generator::ArticleGenerator;
use crate::content::optimizer::ContentOptimizer;
use crate::db::create_pool;
use crate::llm_client::{GeminiClient, GeminiSettings};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgTopicStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scribe v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (topic lookups only)
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    let topics = Arc::new(PgTopicStore::new(db));

    // Initialize LLM client
    let gemini = GeminiClient::new(GeminiSettings {
        api_key: config.gemini_api_key.clone(),
        api_base: config.gemini_api_base.clone(),
        model: config.gemini_model.clone(),
        timeout: Duration::from_secs(config.llm_timeout_secs),
        max_attempts: config.llm_max_attempts,
    })
    .context("Failed to build Gemini HTTP client")?;
    info!("LLM client initialized (model: {})", gemini.model());
    let model = Arc::new(gemini);

    let state = AppState {
        article_generator: ArticleGenerator::new(topics, model.clone()),
        content_optimizer: ContentOptimizer::new(model),
        config: config.clone(),
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
