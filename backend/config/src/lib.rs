//! `podsite-config` — site configuration management.
//!
//! Provides:
//! - Typed config schema (video thumbnails, logging)
//! - YAML read/write with a backup of the previous file
//! - `PODSITE_*` environment overrides
//! - Default value application
//! - Validation

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{apply_env_overrides, apply_env_overrides_with, EnvOverrideError};
pub use io::{config_file_path, load_config, write_config, CONFIG_FILE_NAME};
pub use schema::{LoggingConfig, PodsiteConfig, YoutubeConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Load a config file and apply env overrides and defaults, without
/// validating it.
pub async fn prepare(path: &Path) -> Result<PodsiteConfig> {
    let config = load_config(path).await?;
    let config = apply_env_overrides(config).context("Failed to apply env overrides")?;
    Ok(apply_all_defaults(config))
}

/// Validate a prepared config, logging every warning and error.
pub fn check(config: &PodsiteConfig, path: &Path) -> Result<()> {
    let report = validate(config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        bail!("{} config error(s) in {}", report.errors.len(), path.display());
    }
    Ok(())
}

/// Load, apply env overrides and defaults, and validate a config file.
pub async fn load_and_prepare(path: &Path) -> Result<PodsiteConfig> {
    let config = prepare(path).await?;
    check(&config, path)?;
    Ok(config)
}
