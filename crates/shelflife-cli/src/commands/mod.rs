//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use shelflife_core::{local_today, parse_today, ExpiryExtractor, ShelflifeConfig};

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelflife")
        .join("config.json")
}

/// Load configuration from an explicit path, the default location, or
/// fall back to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ShelflifeConfig> {
    if let Some(path) = config_path {
        debug!("Loading config from {}", path);
        return Ok(ShelflifeConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(ShelflifeConfig::from_file(&default_path)?)
    } else {
        Ok(ShelflifeConfig::default())
    }
}

/// Build an extractor from the scoring section of a configuration.
pub fn build_extractor(config: &ShelflifeConfig) -> anyhow::Result<ExpiryExtractor> {
    Ok(ExpiryExtractor::from_config(config.scoring.clone())?)
}

/// Resolve the `--today` flag, rejecting malformed dates up front.
/// Without the flag the local wall-clock date is used.
pub fn resolve_today(today: Option<&str>) -> anyhow::Result<NaiveDate> {
    match today {
        Some(value) => Ok(parse_today(value)?),
        None => Ok(local_today()),
    }
}
