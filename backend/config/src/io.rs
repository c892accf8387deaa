//! Config file discovery and loading.

use crate::schema::CronlensConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the cronlens config directory.
/// Priority: `CRONLENS_CONFIG_DIR` env > `~/.cronlens/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CRONLENS_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".cronlens"),
        None => PathBuf::from(".cronlens"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Read the config file as an untyped value tree.
///
/// Returns an empty object if the file doesn't exist; an empty file is
/// treated the same way.
pub async fn load_raw(path: &Path) -> Result<Value> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(Value::Object(Default::default()));
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    let value: Value = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(match value {
        Value::Null => Value::Object(Default::default()),
        other => other,
    })
}

/// Load and deserialize the config without env substitution or defaults.
pub async fn load_config(path: &Path) -> Result<CronlensConfig> {
    let value = load_raw(path).await?;
    serde_json::from_value(value)
        .with_context(|| format!("Invalid config structure in: {}", path.display()))
}
