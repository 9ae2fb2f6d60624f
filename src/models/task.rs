//! # Task Model
//!
//! The task entity tracked by the service. Maps to the `task` table:
//!
//! ```sql
//! CREATE TABLE task (
//!   id UUID PRIMARY KEY,
//!   description TEXT NOT NULL,
//!   date_due TIMESTAMPTZ,
//!   date_created TIMESTAMPTZ NOT NULL,
//!   date_updated TIMESTAMPTZ NOT NULL
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Something that must be done.
///
/// Saves overwrite the full record; `date_updated` is not bumped by the
/// storage layer, callers that modify a task are responsible for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub date_due: Option<DateTime<Utc>>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Task {
    /// Create a new task with a fresh id and creation timestamps set to now.
    pub fn new(description: impl Into<String>, date_due: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            date_due,
            date_created: now,
            date_updated: now,
        }
    }
}
