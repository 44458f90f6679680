use std::sync::Arc;

use crate::config::Config;
use crate::store::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable result store. Default: InMemoryResultStore. Redis when REDIS_URL is set.
    pub results: Arc<dyn ResultStore>,
}
