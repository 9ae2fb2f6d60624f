//! # HTTP Surface
//!
//! Axum router, handlers, and API error types. Everything here is plumbing
//! over [`crate::manager::TaskManager`] and [`crate::health::Monitor`].

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::time::Instant;
use tracing::info;

pub mod errors;
pub mod handlers;
pub mod state;

pub use self::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks/{id}", get(handlers::tasks::get_task))
        .route("/tasks", post(handlers::tasks::create_task))
        .route("/health", get(handlers::health::liveness))
        .route("/health/readiness", get(handlers::health::readiness))
        .layer(middleware::from_fn(access_log))
        .with_state(state)
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Access"
    );

    response
}
