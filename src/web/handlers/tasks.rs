//! # Task Handlers
//!
//! HTTP handlers for task retrieval and creation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::models::Task;
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub description: String,
    pub date_due: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub description: Option<String>,
    pub date_due: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct TaskCreatedResponse {
    pub id: Uuid,
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state.manager.get(id).await.map_err(|err| {
        error!(error = %err, %id, "Failed to retrieve task");
        ApiError::Internal
    })?;

    match task {
        Some(task) => Ok(Json(TaskResponse {
            id: task.id,
            description: task.description,
            date_due: task.date_due,
        })),
        None => Err(ApiError::NotFound),
    }
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskCreatedResponse>)> {
    let description = body
        .description
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::unprocessable("Field 'description' is required"))?;

    let task = Task::new(description, body.date_due);

    state.manager.save(&task).await.map_err(|err| {
        error!(error = %err, id = %task.id, "Failed to save task");
        ApiError::Internal
    })?;

    Ok((StatusCode::CREATED, Json(TaskCreatedResponse { id: task.id })))
}
