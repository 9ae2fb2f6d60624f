//! # Resilient Task Manager
//!
//! Composes the cache and store repositories into one read/write surface
//! with a cache-aside policy: the cache is best-effort, the store is
//! authoritative. Cache failures degrade latency and hit rate, never
//! correctness of the operation.

use crate::error::Result;
use crate::models::Task;
use crate::repository::TaskRepository;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Stateless composition of the repository pair.
#[derive(Clone)]
pub struct TaskManager {
    cache: Arc<dyn TaskRepository>,
    store: Arc<dyn TaskRepository>,
}

impl TaskManager {
    pub fn new(cache: Arc<dyn TaskRepository>, store: Arc<dyn TaskRepository>) -> Self {
        Self { cache, store }
    }

    /// Retrieve a task by id, looking to the cache first and falling back on
    /// the store.
    ///
    /// A cache error is logged and treated as a miss. A store hit does not
    /// repopulate the cache: a miss stays a miss until the task is next
    /// saved. That is a deliberate simplicity trade-off, not an omission.
    pub async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        match self.cache.get(id).await {
            Ok(Some(task)) => return Ok(Some(task)),
            Ok(None) => {}
            Err(err) => warn!(error = %err, %id, "Failed to retrieve task from cache"),
        }

        self.store.get(id).await
    }

    /// Store a task to both cache and store.
    ///
    /// A failed cache write is logged and ignored so that a fleeting cache
    /// outage never blocks writes; the store result is returned verbatim.
    /// There is no transactional coupling between the two backends.
    pub async fn save(&self, task: &Task) -> Result<()> {
        if let Err(err) = self.cache.save(task).await {
            warn!(error = %err, id = %task.id, "Failed to store task in cache");
        }

        self.store.save(task).await
    }
}
