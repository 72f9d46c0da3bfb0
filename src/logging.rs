//! Logger bootstrap for the `almanac` binary.
//!
//! The library only talks to the `log` facade. The binary starts a
//! `flexi_logger` backend that writes to stderr (stdout carries the SVG) or
//! to a file. `RUST_LOG` takes precedence over the `-v` count.

use std::path::Path;

use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::info;

use crate::error::AlmanacError;

/// Level used for a given number of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Canonical level name, or an error for anything `log` doesn't know.
pub fn normalize_level(level: &str) -> Result<&'static str, AlmanacError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(AlmanacError::Config(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}

/// Start the global logger. Keep the returned handle alive for the whole
/// process, dropping it flushes and stops logging.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<LoggerHandle, AlmanacError> {
    let level = normalize_level(level)?;
    let mut logger = Logger::try_with_env_or_str(level)?;

    if let Some(path) = log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(path)?)
            .format(flexi_logger::detailed_format);
    }

    let handle = logger.start()?;
    info!(
        "almanac {} logging at {}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}
