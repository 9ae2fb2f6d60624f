//! # Structured Logging
//!
//! Environment-aware tracing initialization. Development gets human-readable
//! console output, production gets JSON lines for log aggregation.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize the global tracing subscriber. Safe to call more than once.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level(&environment)));

        let fmt_layer: Box<dyn Layer<_> + Send + Sync> = if environment == "production" {
            fmt::layer().with_target(true).with_ansi(false).json().boxed()
        } else {
            fmt::layer().with_target(true).boxed()
        };

        // try_init so an already-installed subscriber (e.g. in tests) wins.
        if tracing_subscriber::registry()
            .with(fmt_layer.with_filter(filter))
            .try_init()
            .is_ok()
        {
            tracing::debug!(environment = %environment, "Logging initialized");
        }
    });
}

fn get_environment() -> String {
    std::env::var("TASKTRACK_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}
