//! Result store — keeps each analysis under its own id until it is downloaded
//! or expires.
//!
//! Default: `InMemoryResultStore` (process-local, lazily evicted).
//! `RedisResultStore` when `REDIS_URL` is configured, so several API
//! instances can serve each other's downloads.
//!
//! `AppState` holds an `Arc<dyn ResultStore>`, chosen at startup via config.

mod memory;
mod redis_store;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::report::{AnalysisId, AnalysisReport};

pub use self::memory::InMemoryResultStore;
pub use self::redis_store::RedisResultStore;

/// Implement this to swap storage backends without touching the handlers.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put(&self, report: &AnalysisReport) -> Result<(), AppError>;

    /// `None` when the id is unknown or its entry has expired.
    async fn get(&self, id: AnalysisId) -> Result<Option<AnalysisReport>, AppError>;
}
