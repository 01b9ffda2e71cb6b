//! Config validation with user-friendly messages.

use crate::defaults::normalize_level;
use crate::schema::PodsiteConfig;
use podsite_youtube::ThumbnailQuality;
use thiserror::Error;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &PodsiteConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_youtube(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_youtube(config: &PodsiteConfig, report: &mut ValidationReport) {
    let Some(youtube) = &config.youtube else { return };
    if let Some(quality) = youtube.thumbnail_quality {
        if !quality.always_available() {
            report.warn(
                "youtube.thumbnailQuality",
                format!(
                    "'{quality}' thumbnails are missing for some videos; '{}' always exists",
                    ThumbnailQuality::Hq
                ),
            );
        }
    }
}

fn validate_logging(config: &PodsiteConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        if !LOG_LEVELS.contains(&normalize_level(level).as_str()) {
            report.error(
                "logging.level",
                format!("Unknown log level '{level}'. Use one of: {}", LOG_LEVELS.join(", ")),
            );
        }
    }
    if let Some(dir) = &logging.dir {
        if dir.trim().is_empty() {
            report.error("logging.dir", "Log directory cannot be empty");
        }
    }
}
