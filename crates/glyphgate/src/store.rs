//! Key/value storage collaborators.
//!
//! The engine never talks to a backend directly; it goes through
//! [`CaptchaStore`]. Two adapters ship here: an in-memory store for tests
//! and demos, and a Redis store for shared deployments.

use std::collections::HashMap;

use anyhow::{Context, Result};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tokio::sync::Mutex;

/// Caller-supplied key/value store with advisory expiry.
///
/// `store` persists a value under `key` for roughly `ttl_secs`; expiry
/// enforcement is entirely the backend's business. `fetch` returns the live
/// value or `None` for absent/expired keys. Concurrent calls for different
/// keys must be independently safe.
pub trait CaptchaStore {
    async fn store(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;
    async fn fetch(&self, key: &str) -> Result<Option<String>>;
}

/// In-memory store with expiry stamps. Test and demo backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, (String, i64)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaptchaStore for MemoryStore {
    async fn store(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let expires_at = chrono::Utc::now().timestamp() + ttl_secs as i64;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        let now = chrono::Utc::now().timestamp();
        let mut entries = self.entries.lock().await;
        let expired = matches!(entries.get(key), Some((_, expires_at)) if *expires_at <= now);
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries.get(key).map(|(value, _)| value.clone()))
    }
}

/// Redis-backed store using an auto-reconnecting connection manager.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis at `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).context("failed to create redis client")?;
        let conn = ConnectionManager::new(client)
            .await
            .context("failed to connect to redis")?;
        Ok(Self { conn })
    }
}

impl CaptchaStore for RedisStore {
    async fn store(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.store("captcha:k", "ANSWER", 60).await.unwrap();
        assert_eq!(
            store.fetch("captcha:k").await.unwrap().as_deref(),
            Some("ANSWER")
        );
    }

    #[tokio::test]
    async fn test_memory_store_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.fetch("captcha:missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_expiry() {
        let store = MemoryStore::new();
        store.store("captcha:k", "ANSWER", 0).await.unwrap();
        assert_eq!(store.fetch("captcha:k").await.unwrap(), None);
        // expired entry is gone, not resurrected
        assert_eq!(store.fetch("captcha:k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        store.store("captcha:k", "OLD", 60).await.unwrap();
        store.store("captcha:k", "NEW", 60).await.unwrap();
        assert_eq!(
            store.fetch("captcha:k").await.unwrap().as_deref(),
            Some("NEW")
        );
    }
}
