//! # Tasktrack
//!
//! Task-tracking REST service built around two mechanisms:
//!
//! - **Health monitoring** ([`health`]): each dependency is probed by an
//!   independently scheduled [`health::HealthCheck`] that caches its latest
//!   status; the [`health::Monitor`] aggregates the cached statuses on
//!   demand without touching any backend.
//! - **Cache-aside storage** ([`manager`], [`repository`]): reads prefer the
//!   cache and fall back to the durable store; writes go to both, with cache
//!   failures logged and swallowed so a cache outage never blocks writes.
//!
//! Everything else — routing, JSON, validation, process wiring — is plumbing
//! around those two cores.
//!
//! ## Module Organization
//!
//! - [`models`] - Domain entities
//! - [`repository`] - Cache and store adapters sharing one contract
//! - [`manager`] - The resilient cache-aside composition
//! - [`health`] - Health checks, monitor, and check builders
//! - [`cache`] - Opaque key/value cache contract and Redis driver
//! - [`web`] - Axum HTTP surface
//! - [`config`] - Environment-layered configuration
//! - [`error`] - Structured error handling

pub mod cache;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod manager;
pub mod models;
pub mod repository;
pub mod web;

#[cfg(test)]
pub mod test_utils;

pub use config::TasktrackConfig;
pub use error::{Result, TasktrackError};
pub use manager::TaskManager;
pub use models::Task;
