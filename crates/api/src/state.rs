use std::sync::Arc;

use artfood_core::item::ItemStore;
use artfood_core::lookup::LookupService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: artfood_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Catalog read workflows.
    pub lookup: LookupService,
    /// Item persistence.
    pub items: Arc<dyn ItemStore>,
}
