//! # Cache Backend
//!
//! Byte-oriented key/value cache contract consumed by the repositories and
//! the health checks. A missing key is an `Ok(None)`, never an error, so
//! callers can tell a clean miss apart from a backend failure.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub mod redis;

pub use self::redis::RedisCache;

/// Opaque key/value cache.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Fetch the raw bytes stored under `key`. `Ok(None)` means the key is
    /// absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, optionally expiring after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Probe backend liveness.
    async fn ping(&self) -> Result<()>;
}
