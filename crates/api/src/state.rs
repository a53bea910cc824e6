use std::sync::Arc;

use census_enrichment::Enricher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: census_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Age / gender / nationality enrichment run on create and update.
    pub enricher: Enricher,
}
