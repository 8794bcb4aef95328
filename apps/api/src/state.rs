use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::campaign::templates::TemplateCatalog;
use crate::config::Config;
use crate::profile::engine::ProfileEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable profile backend. Default: TemplateProfileEngine.
    pub engine: Arc<dyn ProfileEngine>,
    /// Campaign template catalog — built-ins plus session-registered user
    /// templates. Never persisted.
    pub templates: Arc<RwLock<TemplateCatalog>>,
}
