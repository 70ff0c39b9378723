mod api;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod flows;
mod logging;
mod repo;
mod routes;
mod services;

use anyhow::Result;
use std::sync::Arc;

use repo::{InMemoryProjects, InMemoryPurchaseOrders, InMemoryQuotes, InMemorySuppliers};
use services::{GenAiClient, MemoryCache};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting binaa backend"
    );

    // In-process cache
    let cache = MemoryCache::new(settings.cache_ttl_seconds);

    // Generation API client
    let genai = GenAiClient::new(
        &settings.genai_base_url,
        &settings.genai_api_key,
        &settings.genai_text_model,
        &settings.genai_image_model,
        settings.genai_timeout_seconds,
    )?;

    // Optionally check generation API health (non-blocking)
    tokio::spawn({
        let genai = genai.clone();
        async move {
            match genai.health_check().await {
                Ok(()) => tracing::info!("Generation API is healthy"),
                Err(e) => tracing::warn!(
                    error = %e,
                    "Generation API health check failed - will retry on first request"
                ),
            }
        }
    });

    // Create application state with in-memory repositories
    let state = app::AppState::new(
        settings.clone(),
        cache,
        genai,
        Arc::new(InMemoryProjects::default()),
        Arc::new(InMemorySuppliers::default()),
        Arc::new(InMemoryPurchaseOrders::default()),
        Arc::new(InMemoryQuotes::default()),
    );

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
