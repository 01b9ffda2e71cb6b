//! podsite configuration schema, typed for serde YAML/JSON.

use podsite_youtube::{ThumbnailQuality, VideoReferenceResolver};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodsiteConfig {
    /// Video link handling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<YoutubeConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeConfig {
    /// Thumbnail tier used for episode artwork
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_quality: Option<ThumbnailQuality>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for rolling NDJSON log files; console only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Emit JSON on the console too
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

impl PodsiteConfig {
    pub fn thumbnail_quality(&self) -> ThumbnailQuality {
        self.youtube
            .as_ref()
            .and_then(|y| y.thumbnail_quality)
            .unwrap_or_default()
    }

    /// Build the video resolver for this configuration.
    pub fn resolver(&self) -> VideoReferenceResolver {
        VideoReferenceResolver::with_quality(self.thumbnail_quality())
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}
