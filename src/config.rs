//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `TAIHANG_ASSETS_DIR` and `TAIHANG_LOG_LEVEL` env overrides.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{error::AppError, logger, site::DEFAULT_ASSETS_DIR};

/// Fully-resolved startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    /// Directory the bundled branding images are resolved against.
    pub assets_dir: PathBuf,
    /// Append logs here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            log_file: None,
        }
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
}

#[derive(Deserialize)]
struct RawSite {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_assets_dir")]
    assets_dir: String,
    #[serde(default)]
    log_file: Option<String>,
}

impl Default for RawSite {
    fn default() -> Self {
        Self { log_level: default_log_level(), assets_dir: default_assets_dir(), log_file: None }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_assets_dir() -> String { DEFAULT_ASSETS_DIR.to_string() }

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let assets_dir_override = env::var("TAIHANG_ASSETS_DIR").ok();
    let log_level_override = env::var("TAIHANG_LOG_LEVEL").ok();
    load_from(
        Path::new("config/default.toml"),
        assets_dir_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    assets_dir_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let s = parsed.site;
    let assets_dir = expand_home(assets_dir_override.unwrap_or(&s.assets_dir));
    let log_level = log_level_override.unwrap_or(&s.log_level).to_string();
    logger::parse_level(&log_level)
        .map_err(|e| AppError::Config(format!("invalid log_level in {}: {e}", path.display())))?;

    Ok(Config {
        log_level,
        assets_dir,
        log_file: s.log_file.map(|f| expand_home(&f)),
    })
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
