//! Check function builders for the service's two dependencies.

use crate::cache::CacheClient;
use crate::health::check::{check_fn, CheckFn};
use crate::health::status::{State, Status};
use serde_json::json;
use sqlx::PgPool;
use tracing::error;

/// Probe the database with a trivial query.
///
/// `Up` carries connection pool counters as diagnostic details; any failure
/// is `Down` because the store is authoritative and the service cannot
/// operate without it.
pub fn database_check(pool: PgPool) -> CheckFn {
    check_fn(move || {
        let pool = pool.clone();
        async move {
            if let Err(err) = sqlx::query("SELECT 1").execute(&pool).await {
                error!(error = %err, "Database health check failed");
                return Status::down();
            }

            let idle = pool.num_idle();
            let in_use = (pool.size() as usize).saturating_sub(idle);
            Status::with_details(
                State::Up,
                json!({
                    "connections_in_use": in_use,
                    "connections_idle": idle,
                }),
            )
        }
    })
}

/// Probe the cache backend with a ping.
///
/// The cache is just a performance layer: a failed connection does not mean
/// the application is down. A failure reads as `Warn` so the outage is
/// visible without triggering application restarts.
pub fn cache_check<C>(cache: C) -> CheckFn
where
    C: CacheClient + Clone + 'static,
{
    check_fn(move || {
        let cache = cache.clone();
        async move {
            match cache.ping().await {
                Ok(()) => Status::up(),
                Err(_) => Status::warn(),
            }
        }
    })
}
