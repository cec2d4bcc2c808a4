//! Tracing subscriber setup for the `taihang-site` binary.
//!
//! The configured `log_level` is the default directive; a `RUST_LOG` set in
//! the environment refines it per target (e.g. `taihang_site::assets=trace`).

use std::{fs::OpenOptions, path::Path};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

use crate::{config::Config, error::AppError};

/// Install the global subscriber from resolved config. Call once.
pub fn init(config: &Config) -> Result<(), AppError> {
    let level = parse_level(&config.log_level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (writer, ansi) = match config.log_file.as_deref() {
        Some(path) => (BoxMakeWriter::new(open_log_file(path)?), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, AppError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Logger(format!("cannot open log file {}: {e}", path.display())))
}

/// Parse a plain level name (`error` .. `trace`, or `off`).
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
