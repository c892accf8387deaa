//! `cronlens-config` — configuration for the cronlens tools.
//!
//! Provides:
//! - Typed config schema (preview, output, logging)
//! - YAML loading from `~/.cronlens/config.yaml` or an explicit path
//! - `${ENV_VAR}` substitution
//! - Default value application
//! - Validation with path-qualified messages

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, load_raw};
pub use schema::{CronlensConfig, LoggingConfig, OutputConfig, PreviewConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport, MAX_PREVIEW_COUNT};

use anyhow::{bail, Context, Result};
use std::path::Path;

/// A validated config plus any non-fatal findings.
///
/// Warnings are returned rather than logged so the caller can report them
/// once its logger is installed.
#[derive(Debug)]
pub struct PreparedConfig {
    pub config: CronlensConfig,
    pub warnings: Vec<ConfigValidationError>,
}

/// Load, apply env substitution and defaults, then validate a config file.
///
/// This is the main entry point for loading a config at runtime. The first
/// validation error fails the load.
pub async fn load_and_prepare(path: &Path) -> Result<PreparedConfig> {
    let value = load_raw(path).await?;

    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;

    let config: CronlensConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    let config = apply_all_defaults(config);

    let report = validate(&config);
    if let Some(first) = report.errors.into_iter().next() {
        bail!(first);
    }

    Ok(PreparedConfig {
        config,
        warnings: report.warnings,
    })
}
