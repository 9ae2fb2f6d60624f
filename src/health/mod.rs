//! # Health Monitoring
//!
//! Background monitoring of dependent services. Each [`HealthCheck`] polls
//! one backend on its own timer and publishes its latest result; the
//! [`Monitor`] aggregates the published results on demand without touching
//! any backend, so answering a readiness probe never waits on network I/O.

pub mod check;
pub mod checks;
pub mod monitor;
pub mod status;

pub use self::check::{check_fn, CheckFn, HealthCheck};
pub use self::checks::{cache_check, database_check};
pub use self::monitor::{CheckSnapshot, Monitor, MonitorStatus};
pub use self::status::{State, Status};
