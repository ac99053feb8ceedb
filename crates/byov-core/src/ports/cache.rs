use std::time::Duration;

use async_trait::async_trait;

/// String key/value store with optional expiry.
///
/// Holds revoked tokens (`revoked:{token_id}`). Expired keys read as absent.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;

    /// Store `value`, replacing any previous one. `None` keeps it until deleted.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    async fn exists(&self, key: &str) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache unreachable: {0}")]
    Connection(String),

    #[error("Cache operation failed: {0}")]
    Operation(String),
}
