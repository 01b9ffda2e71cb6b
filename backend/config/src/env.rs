//! Environment variable overrides for config values.
//!
//! `PODSITE_THUMBNAIL_QUALITY` and `PODSITE_LOG_LEVEL` take precedence over
//! the config file. Empty values are ignored.

use std::collections::HashMap;

use podsite_youtube::{ThumbnailQuality, UnknownQuality};

use crate::defaults::normalize_level;
use crate::schema::{LoggingConfig, PodsiteConfig, YoutubeConfig};

pub const THUMBNAIL_QUALITY_VAR: &str = "PODSITE_THUMBNAIL_QUALITY";
pub const LOG_LEVEL_VAR: &str = "PODSITE_LOG_LEVEL";

/// Error returned for an override that cannot be applied.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for env var \"{var_name}\": {source}")]
pub struct EnvOverrideError {
    pub var_name: String,
    #[source]
    pub source: UnknownQuality,
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: PodsiteConfig) -> Result<PodsiteConfig, EnvOverrideError> {
    apply_env_overrides_with(config, &std::env::vars().collect())
}

/// Apply overrides from a provided map (useful for testing).
pub fn apply_env_overrides_with(
    mut config: PodsiteConfig,
    env: &HashMap<String, String>,
) -> Result<PodsiteConfig, EnvOverrideError> {
    if let Some(raw) = non_empty(env, THUMBNAIL_QUALITY_VAR) {
        let quality: ThumbnailQuality = raw.parse().map_err(|source| EnvOverrideError {
            var_name: THUMBNAIL_QUALITY_VAR.to_string(),
            source,
        })?;
        config
            .youtube
            .get_or_insert_with(YoutubeConfig::default)
            .thumbnail_quality = Some(quality);
    }

    if let Some(level) = non_empty(env, LOG_LEVEL_VAR) {
        config.logging.get_or_insert_with(LoggingConfig::default).level =
            Some(normalize_level(level));
    }

    Ok(config)
}

fn non_empty<'a>(env: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    env.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}
