//! Config defaults: fills in unset values after loading.
//!
//! The thumbnail tier is left unset when the user did not choose one;
//! `PodsiteConfig::thumbnail_quality` falls back to `maxres` on read.

use crate::schema::{LoggingConfig, PodsiteConfig};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Canonical spelling of a log level: trimmed, lowercase.
pub fn normalize_level(level: &str) -> String {
    level.trim().to_ascii_lowercase()
}

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: PodsiteConfig) -> PodsiteConfig {
    apply_logging_defaults(config)
}

fn apply_logging_defaults(mut config: PodsiteConfig) -> PodsiteConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    logging.level = Some(match &logging.level {
        Some(level) => normalize_level(level),
        None => DEFAULT_LOG_LEVEL.to_string(),
    });
    if logging.json.is_none() {
        logging.json = Some(false);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::YoutubeConfig;
    use podsite_youtube::ThumbnailQuality;

    #[test]
    fn fills_level_and_leaves_quality_unchosen() {
        let cfg = apply_all_defaults(PodsiteConfig::default());
        assert!(cfg.youtube.is_none());
        assert_eq!(cfg.thumbnail_quality(), ThumbnailQuality::MaxRes);
        assert_eq!(cfg.logging.unwrap().level.as_deref(), Some(DEFAULT_LOG_LEVEL));
    }

    #[test]
    fn normalizes_level_case() {
        let mut cfg = PodsiteConfig::default();
        cfg.logging = Some(LoggingConfig {
            level: Some(" DEBUG ".to_string()),
            ..Default::default()
        });
        let cfg = apply_all_defaults(cfg);
        assert_eq!(cfg.logging().level.as_deref(), Some("debug"));
    }

    #[test]
    fn does_not_override_user_quality() {
        let mut cfg = PodsiteConfig::default();
        cfg.youtube = Some(YoutubeConfig {
            thumbnail_quality: Some(ThumbnailQuality::Hq),
        });
        let cfg = apply_all_defaults(cfg);
        assert_eq!(cfg.thumbnail_quality(), ThumbnailQuality::Hq);
    }
}
