//! # Task Repositories
//!
//! The cache-aside repository pair: one adapter per backend, both
//! implementing the same read/write contract. The adapters hold no policy,
//! caching decisions live in [`crate::manager::TaskManager`].

use crate::error::Result;
use crate::models::Task;
use async_trait::async_trait;
use uuid::Uuid;

pub mod cache;
pub mod store;

pub use self::cache::TaskCacheRepository;
pub use self::store::TaskStoreRepository;

/// Read/write contract shared by the cache and store adapters.
///
/// "Not found" is a first-class non-error outcome: `get` returns `Ok(None)`
/// for a clean miss, reserving errors for backend or codec failures.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Task>>;

    async fn save(&self, task: &Task) -> Result<()>;
}
