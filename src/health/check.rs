//! Health check definitions.

use crate::health::Status;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TTL: Duration = Duration::from_secs(10);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// One unit of probing work. Must not panic: any internal failure must be
/// converted into a `Down` status with detail. The caller enforces the
/// configured deadline around each invocation.
pub type CheckFn = Arc<dyn Fn() -> BoxFuture<'static, Status> + Send + Sync>;

/// Wrap an async closure as a [`CheckFn`].
pub fn check_fn<F, Fut>(f: F) -> CheckFn
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Status> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// A named, independently scheduled probe of one dependency.
///
/// `ttl` is the polling cadence, `timeout` is the per-invocation deadline
/// after which the cycle's result is treated as `Down`.
#[derive(Clone)]
pub struct HealthCheck {
    pub name: String,
    pub ttl: Duration,
    pub timeout: Duration,
    pub(crate) check: CheckFn,
}

impl HealthCheck {
    pub fn new(name: impl Into<String>, check: CheckFn) -> Self {
        Self {
            name: name.into(),
            ttl: DEFAULT_TTL,
            timeout: DEFAULT_TIMEOUT,
            check,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for HealthCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthCheck")
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
