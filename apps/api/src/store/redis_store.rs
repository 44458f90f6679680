use anyhow::Context;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::Client as RedisClient;

use super::ResultStore;
use crate::errors::AppError;
use crate::models::report::{AnalysisId, AnalysisReport};

/// Stores reports as JSON under `analysis:<uuid>` with a Redis-side expiry.
///
/// One `ConnectionManager` is opened at startup and cloned per call. Clones
/// share the multiplexed connection, which reconnects after a drop.
pub struct RedisResultStore {
    connection: ConnectionManager,
    ttl_secs: u64,
}

impl RedisResultStore {
    pub async fn open(redis_url: &str, ttl_secs: u64) -> anyhow::Result<Self> {
        let client = RedisClient::open(redis_url).context("Invalid REDIS_URL")?;
        let connection = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;
        Ok(Self {
            connection,
            ttl_secs,
        })
    }
}

fn key_for(id: AnalysisId) -> String {
    format!("analysis:{id}")
}

#[async_trait]
impl ResultStore for RedisResultStore {
    async fn put(&self, report: &AnalysisReport) -> Result<(), AppError> {
        let payload = serde_json::to_string(report).context("Failed to serialize report")?;
        let mut con = self.connection.clone();
        redis::cmd("SET")
            .arg(key_for(report.analysis_id))
            .arg(payload)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut con)
            .await?;
        Ok(())
    }

    async fn get(&self, id: AnalysisId) -> Result<Option<AnalysisReport>, AppError> {
        let mut con = self.connection.clone();
        let payload: Option<String> = redis::cmd("GET")
            .arg(key_for(id))
            .query_async(&mut con)
            .await?;

        payload
            .map(|json| serde_json::from_str(&json).context("Stored report is not valid JSON"))
            .transpose()
            .map_err(AppError::Internal)
    }
}
