//! Cache adapter for tasks: JSON-encoded entities under `task.{id}` keys.

use crate::cache::CacheClient;
use crate::error::Result;
use crate::models::Task;
use crate::repository::TaskRepository;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

pub struct TaskCacheRepository<C> {
    cache: C,
    entry_ttl: Option<Duration>,
}

impl<C: CacheClient> TaskCacheRepository<C> {
    /// Entries do not expire unless a ttl is configured via
    /// [`with_entry_ttl`](Self::with_entry_ttl).
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            entry_ttl: None,
        }
    }

    pub fn with_entry_ttl(mut self, ttl: Duration) -> Self {
        self.entry_ttl = Some(ttl);
        self
    }
}

fn cache_key(id: Uuid) -> String {
    format!("task.{id}")
}

#[async_trait]
impl<C: CacheClient> TaskRepository for TaskCacheRepository<C> {
    /// A clean miss is `Ok(None)`; a backend failure or a payload that no
    /// longer decodes is an error.
    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let Some(raw) = self.cache.get(&cache_key(id)).await? else {
            return Ok(None);
        };

        let task = serde_json::from_slice(&raw)?;
        Ok(Some(task))
    }

    async fn save(&self, task: &Task) -> Result<()> {
        let encoded = serde_json::to_vec(task)?;
        self.cache
            .set(&cache_key(task.id), &encoded, self.entry_ttl)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryCache;

    #[tokio::test]
    async fn get_returns_none_on_clean_miss() {
        let repo = TaskCacheRepository::new(InMemoryCache::new());

        let found = repo.get(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let repo = TaskCacheRepository::new(InMemoryCache::new());
        let task = Task::new("water the plants", None);

        repo.save(&task).await.unwrap();

        let found = repo.get(task.id).await.unwrap();
        assert_eq!(found, Some(task));
    }

    #[tokio::test]
    async fn get_fails_on_undecodable_payload() {
        let cache = InMemoryCache::new();
        let id = Uuid::new_v4();
        cache
            .set(&format!("task.{id}"), b"not json", None)
            .await
            .unwrap();

        let repo = TaskCacheRepository::new(cache);
        assert!(repo.get(id).await.is_err());
    }

    #[tokio::test]
    async fn backend_failures_surface_as_errors() {
        let repo = TaskCacheRepository::new(InMemoryCache::failing());
        let task = Task::new("buy milk", None);

        assert!(repo.get(task.id).await.is_err());
        assert!(repo.save(&task).await.is_err());
    }
}
