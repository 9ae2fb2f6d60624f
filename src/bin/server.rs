//! Service entry point: wires configuration, backends, health monitoring,
//! and the HTTP server together.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use tasktrack::cache::RedisCache;
use tasktrack::health::{cache_check, database_check, HealthCheck, Monitor};
use tasktrack::logging::init_logging;
use tasktrack::manager::TaskManager;
use tasktrack::repository::{TaskCacheRepository, TaskStoreRepository};
use tasktrack::web::{self, AppState};
use tasktrack::TasktrackConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = TasktrackConfig::load().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let cache = RedisCache::new(&config.redis_url)
        .await
        .context("Failed to connect to Redis")?;

    let monitor = Arc::new(Monitor::new());
    monitor.monitor(vec![
        HealthCheck::new("redis", cache_check(cache.clone()))
            .with_ttl(config.health_check_ttl())
            .with_timeout(config.health_check_timeout()),
        HealthCheck::new("database", database_check(pool.clone()))
            .with_ttl(config.health_check_ttl())
            .with_timeout(config.health_check_timeout()),
    ])?;

    let manager = TaskManager::new(
        Arc::new(TaskCacheRepository::new(cache)),
        Arc::new(TaskStoreRepository::new(pool)),
    );

    let app = web::router(AppState {
        manager,
        monitor: monitor.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(port = config.http_port, "Started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(monitor))
        .await
        .context("Server encountered an error")?;

    Ok(())
}

async fn shutdown_signal(monitor: Arc<Monitor>) {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, stopping health monitor");
    monitor.shutdown();
}
