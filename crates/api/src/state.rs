use std::sync::Arc;

use bauhub_services::Services;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via axum's `State` extractor.
///
/// Must be `Clone` because axum clones state into each handler invocation.
#[derive(Clone)]
pub struct AppState {
    /// Entity services over the configured store.
    pub services: Services,
    /// Server configuration (immutable after startup).
    pub config: Arc<ServerConfig>,
    /// Set only for the PostgreSQL backend; used by the health check.
    pub pool: Option<bauhub_db::DbPool>,
}
