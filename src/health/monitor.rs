//! # Health Monitor
//!
//! Owns a named set of health checks, runs each on its own timer, and
//! aggregates their last observed statuses on demand. `check()` is a pure
//! memory read: polling is fully decoupled from request-serving latency.

use crate::error::{Result, TasktrackError};
use crate::health::check::HealthCheck;
use crate::health::status::{State, Status};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Last observed result of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSnapshot {
    pub status: Status,
    pub timestamp: DateTime<Utc>,
}

/// Point-in-time aggregate view, computed fresh on every [`Monitor::check`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorStatus {
    pub state: State,
    pub checks: HashMap<String, CheckSnapshot>,
}

/// Published slot for one check. Written only by that check's polling loop,
/// read by arbitrary callers of `check()`.
struct CheckSlot {
    observed: RwLock<CheckSnapshot>,
}

pub struct Monitor {
    checks: RwLock<HashMap<String, Arc<CheckSlot>>>,
    shutdown: watch::Sender<bool>,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    pub fn new() -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            checks: RwLock::new(HashMap::new()),
            shutdown,
        }
    }

    /// Register checks and start their polling loops. Returns immediately;
    /// each check polls once right away and then every `ttl` on its own
    /// independent timer.
    ///
    /// Registering a name twice, within one call or across calls, is an
    /// error and leaves the monitor unchanged.
    pub fn monitor(&self, checks: Vec<HealthCheck>) -> Result<()> {
        let mut registered = self.checks.write();

        let mut batch = std::collections::HashSet::new();
        for check in &checks {
            if registered.contains_key(&check.name) || !batch.insert(check.name.clone()) {
                return Err(TasktrackError::Health(format!(
                    "health check '{}' is already registered",
                    check.name
                )));
            }
        }

        for check in checks {
            // Until the first poll completes the check reads as Down, so a
            // not-yet-probed dependency can never be mistaken for healthy.
            let slot = Arc::new(CheckSlot {
                observed: RwLock::new(CheckSnapshot {
                    status: Status::down(),
                    timestamp: Utc::now(),
                }),
            });
            registered.insert(check.name.clone(), slot.clone());

            let rx = self.shutdown.subscribe();
            tokio::spawn(run_polling_loop(check, slot, rx));
        }

        Ok(())
    }

    /// Aggregate the last observed status of every registered check.
    ///
    /// Never triggers a backend call and never blocks on I/O: O(number of
    /// checks) reads of published state. Aggregation is the worst component
    /// state: any `Down` wins, else any `Warn`, else `Up`.
    pub fn check(&self) -> MonitorStatus {
        let registered = self.checks.read();

        let mut state = State::Up;
        let mut checks = HashMap::with_capacity(registered.len());
        for (name, slot) in registered.iter() {
            let snapshot = slot.observed.read().clone();
            state = state.max(snapshot.status.state);
            checks.insert(name.clone(), snapshot);
        }

        MonitorStatus { state, checks }
    }

    /// Stop all polling loops. An in-flight poll finishes within its own
    /// timeout before the loop observes the signal.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }
}

async fn run_polling_loop(
    check: HealthCheck,
    slot: Arc<CheckSlot>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        if *shutdown.borrow() {
            break;
        }

        let status = poll(&check).await;
        *slot.observed.write() = CheckSnapshot {
            status,
            timestamp: Utc::now(),
        };

        tokio::select! {
            _ = tokio::time::sleep(check.ttl) => {}
            // Fires on shutdown() and when the owning monitor is dropped.
            _ = shutdown.changed() => break,
        }
    }

    debug!(check = %check.name, "Health check polling loop stopped");
}

/// Run the check function under its deadline. A timeout is fatal for the
/// cycle, not for the process: it publishes as `Down` with no details.
async fn poll(check: &HealthCheck) -> Status {
    match tokio::time::timeout(check.timeout, (*check.check)()).await {
        Ok(status) => status,
        Err(_) => {
            warn!(
                check = %check.name,
                timeout_ms = check.timeout.as_millis() as u64,
                "Health check timed out"
            );
            Status::down()
        }
    }
}
