use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::ResultStore;
use crate::errors::AppError;
use crate::models::report::{AnalysisId, AnalysisReport};

/// Process-local store. Expired entries are dropped on the next `put`, and
/// `get` refuses to return them.
pub struct InMemoryResultStore {
    ttl: Duration,
    entries: RwLock<HashMap<AnalysisId, (Instant, AnalysisReport)>>,
}

impl InMemoryResultStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn is_live(&self, stored_at: Instant, now: Instant) -> bool {
        now.duration_since(stored_at) < self.ttl
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn put(&self, report: &AnalysisReport) -> Result<(), AppError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, (stored_at, _)| self.is_live(*stored_at, now));
        entries.insert(report.analysis_id, (now, report.clone()));
        Ok(())
    }

    async fn get(&self, id: AnalysisId) -> Result<Option<AnalysisReport>, AppError> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(&id)
            .filter(|(stored_at, _)| self.is_live(*stored_at, now))
            .map(|(_, report)| report.clone()))
    }
}
