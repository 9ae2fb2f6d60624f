//! Shared test doubles for the repository and manager layers.

use crate::cache::CacheClient;
use crate::error::{Result, TasktrackError};
use crate::models::Task;
use crate::repository::TaskRepository;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn injected_failure() -> TasktrackError {
    TasktrackError::Cache(redis::RedisError::from((
        redis::ErrorKind::IoError,
        "injected failure",
    )))
}

/// In-memory task repository with call counters, optionally failing every
/// operation.
#[derive(Default)]
pub struct FakeTaskRepository {
    tasks: Mutex<HashMap<Uuid, Task>>,
    get_calls: AtomicUsize,
    save_calls: AtomicUsize,
    fail: bool,
}

impl FakeTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation returns an error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Seed a task without counting a save call.
    pub fn insert(&self, task: Task) {
        self.tasks.lock().insert(task.id, task);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for FakeTaskRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(injected_failure());
        }
        Ok(self.tasks.lock().get(&id).cloned())
    }

    async fn save(&self, task: &Task) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(injected_failure());
        }
        self.tasks.lock().insert(task.id, task.clone());
        Ok(())
    }
}

/// In-memory cache backend, optionally failing every operation.
#[derive(Clone, Default)]
pub struct InMemoryCache {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail: bool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CacheClient for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.fail {
            return Err(injected_failure());
        }
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        if self.fail {
            return Err(injected_failure());
        }
        self.entries.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        if self.fail {
            return Err(injected_failure());
        }
        Ok(())
    }
}
