//! Logging setup and structured logging helpers.

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set. Calling this
/// more than once is harmless: later calls leave the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::defaults::LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .try_init();
}

pub fn log_startup(component: &str, phase: &str, detail: Option<&str>) {
    match detail {
        Some(detail) => info!(component, phase, detail, "startup"),
        None => info!(component, phase, "startup"),
    }
}

pub fn log_case_result(index: usize, name: &str, kind: &str, passed: bool, actual: &str, expected: &str) {
    if passed {
        info!(index, name, kind, actual, "check passed");
    } else {
        warn!(index, name, kind, actual, expected, "check failed");
    }
}

pub fn log_error(err: &dyn std::fmt::Display, context: &str, kind: &str) {
    error!(error = %err, context, kind, "operation failed");
}

pub fn log_performance_metric(name: &str, value: f64, unit: &str, context: &str) {
    info!(metric = name, value, unit, context, "performance metric");
}
