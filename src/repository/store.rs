//! Postgres adapter for tasks.
//!
//! Runtime-checked queries keep builds independent of a live database; the
//! row shape is pinned by the `FromRow` derive on [`Task`].

use crate::error::Result;
use crate::models::Task;
use crate::repository::TaskRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_TASK: &str = "SELECT id, description, date_due, date_created, date_updated \
     FROM task WHERE id = $1";

const UPSERT_TASK: &str = "INSERT INTO task (id, description, date_due, date_created, date_updated) \
     VALUES ($1, $2, $3, $4, $5) \
     ON CONFLICT (id) DO UPDATE SET \
       description = EXCLUDED.description, \
       date_due = EXCLUDED.date_due, \
       date_created = EXCLUDED.date_created, \
       date_updated = EXCLUDED.date_updated";

pub struct TaskStoreRepository {
    pool: PgPool,
}

impl TaskStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for TaskStoreRepository {
    /// "No such row" is normalized to `Ok(None)`.
    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(SELECT_TASK)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }

    /// Overwrites the full record for an existing id.
    async fn save(&self, task: &Task) -> Result<()> {
        sqlx::query(UPSERT_TASK)
            .bind(task.id)
            .bind(&task.description)
            .bind(task.date_due)
            .bind(task.date_created)
            .bind(task.date_updated)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
