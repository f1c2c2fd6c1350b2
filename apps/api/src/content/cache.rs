use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisError};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{ContentError, ContentStore};

const KEY_NAMESPACE: &str = "darkroom:content:";

#[derive(Debug, Error)]
enum CacheError {
    #[error("{0}")]
    Redis(#[from] RedisError),

    #[error("no reply within {0:?}")]
    Timeout(Duration),
}

/// Redis read-through cache in front of another store.
///
/// Only successful `get`s are cached, for `ttl_secs`. Listings always go to the
/// inner store. Redis is best-effort: every connect and command is bounded by
/// `timeout`, and on any failure the connection is dropped (rebuilt on the next
/// call) and the request is served from the inner store instead.
pub struct CachedStore {
    inner: Arc<dyn ContentStore>,
    client: redis::Client,
    conn: Mutex<Option<MultiplexedConnection>>,
    ttl_secs: u64,
    timeout: Duration,
}

impl CachedStore {
    pub fn new(
        inner: Arc<dyn ContentStore>,
        client: redis::Client,
        ttl_secs: u64,
        timeout: Duration,
    ) -> Self {
        Self {
            inner,
            client,
            conn: Mutex::new(None),
            ttl_secs,
            timeout,
        }
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, RedisError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(CacheError::Timeout(self.timeout)),
        }
    }

    async fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        let mut slot = self.conn.lock().await;
        if let Some(conn) = slot.as_ref() {
            return Ok(conn.clone());
        }
        let conn = self
            .bounded(self.client.get_multiplexed_async_connection())
            .await?;
        *slot = Some(conn.clone());
        Ok(conn)
    }

    /// Forgets the current connection so the next call reconnects.
    async fn reset(&self) {
        *self.conn.lock().await = None;
    }

    async fn read_cached(&self, cache_key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.connection().await?;
        self.bounded(conn.get(cache_key)).await
    }

    async fn write_cached(&self, cache_key: &str, body: &[u8]) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        self.bounded(conn.set_ex(cache_key, body, self.ttl_secs)).await
    }
}

#[async_trait]
impl ContentStore for CachedStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, ContentError> {
        let cache_key = format!("{KEY_NAMESPACE}{key}");

        match self.read_cached(&cache_key).await {
            Ok(Some(body)) => {
                debug!("Cache hit for {key}");
                return Ok(Some(Bytes::from(body)));
            }
            Ok(None) => debug!("Cache miss for {key}"),
            Err(e) => {
                warn!("Redis read failed for {key}: {e}");
                self.reset().await;
            }
        }

        let body = self.inner.get(key).await?;
        if let Some(body) = &body {
            if let Err(e) = self.write_cached(&cache_key, body).await {
                warn!("Redis write failed for {key}: {e}");
                self.reset().await;
            }
        }
        Ok(body)
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, ContentError> {
        self.inner.list(prefix).await
    }
}
