//! # SCORM Duration
//!
//! Validation and comparison of the data-model `duration` type, the
//! ISO-8601-derived grammar `P[nY][nM][nD][T[nH][nM][nS]]`:
//! - Format validation returning a data-model [`ErrorCode`]
//! - Normalization to total seconds with fixed year and month lengths
//! - Equality by total seconds (`P1D` equals `PT24H`)
//! - A YAML-driven batch checker and a small CLI

pub mod check;
pub mod config;
pub mod constants;
pub mod duration;
pub mod errors;
pub mod utils;
pub mod validator;

use std::path::PathBuf;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use crate::config::{CheckConfig, LoggingConfig};
use crate::utils::logging::*;

pub use crate::duration::{parse, DurationValue};
pub use crate::errors::{DurationError, ErrorCode};
pub use crate::validator::{compare, validate, DurationValidator, TypeValidator};

/// Runs every case of a check file and prints the JSON report.
///
/// # Arguments
/// * `config_path` - Path to the YAML check file
///
/// # Returns
/// * `Result<()>` - Ok if every case matched its expectation
pub async fn run(config_path: PathBuf) -> Result<()> {
    dotenv().ok();

    let config = match CheckConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            log_error(&e, "check", "config_load_failed");
            return Err(e);
        }
    };
    init_logging(&config.logging);
    log_startup("check file", "loaded", config_path.to_str());

    let started = std::time::Instant::now();
    let report = check::run_cases(config.cases).await?;
    log_performance_metric(
        "check_duration_ms",
        started.elapsed().as_secs_f64() * 1000.0,
        "ms",
        "check",
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(passed = report.passed, failed = report.failed, "Check finished");

    if !report.is_success() {
        anyhow::bail!("{} of {} checks failed", report.failed, report.results.len());
    }
    Ok(())
}
