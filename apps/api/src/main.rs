mod campaign;
mod config;
mod db;
mod errors;
mod models;
mod profile;
mod review;
mod routes;
mod state;
mod strategy;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::campaign::templates::TemplateCatalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::profile::engine::TemplateProfileEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Beacon API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    // Profile engine: deterministic template expansion is the shipping default.
    let engine = Arc::new(TemplateProfileEngine);

    // Campaign template catalog seeded with the built-in presets.
    let templates = Arc::new(RwLock::new(TemplateCatalog::default()));
    info!(
        "Template catalog seeded with {} built-in campaigns",
        templates.read().await.all().len()
    );

    let state = AppState {
        db,
        config: config.clone(),
        engine,
        templates,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
