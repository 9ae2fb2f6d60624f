//! # Health Handlers
//!
//! Liveness and readiness endpoints. Readiness reads the monitor's cached
//! snapshot, so it answers without touching any backend: `DOWN` maps to 503,
//! `UP` and `WARN` map to 200 (a degraded cache must not trigger restarts).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::health::State as HealthState;
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub state: HealthState,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub state: HealthState,
    pub components: HashMap<String, ComponentHealth>,
}

/// GET /health
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// GET /health/readiness
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let monitor_status = state.monitor.check();

    let components = monitor_status
        .checks
        .into_iter()
        .map(|(name, snapshot)| {
            (
                name,
                ComponentHealth {
                    state: snapshot.status.state,
                    timestamp: snapshot.timestamp,
                },
            )
        })
        .collect();

    let status_code = if monitor_status.state == HealthState::Down {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (
        status_code,
        Json(ReadinessResponse {
            state: monitor_status.state,
            components,
        }),
    )
}
