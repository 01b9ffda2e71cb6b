//! Thumbnail resolution tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Thumbnail image variant served by the platform's image host.
///
/// `MaxRes` (1280x720) is not generated for every upload; `Hq` (480x360)
/// always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    /// 120x90
    #[serde(alias = "low")]
    Default,
    /// 320x180
    #[serde(alias = "mqdefault", alias = "medium")]
    Mq,
    /// 480x360
    #[serde(alias = "hqdefault", alias = "high")]
    Hq,
    /// 640x480
    #[serde(alias = "sddefault", alias = "standard")]
    Sd,
    /// 1280x720
    #[default]
    #[serde(alias = "maxresdefault")]
    MaxRes,
}

impl ThumbnailQuality {
    pub const ALL: [ThumbnailQuality; 5] = [
        ThumbnailQuality::Default,
        ThumbnailQuality::Mq,
        ThumbnailQuality::Hq,
        ThumbnailQuality::Sd,
        ThumbnailQuality::MaxRes,
    ];

    /// Image file stem used in the thumbnail URL.
    pub fn file_stem(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::Mq => "mqdefault",
            ThumbnailQuality::Hq => "hqdefault",
            ThumbnailQuality::Sd => "sddefault",
            ThumbnailQuality::MaxRes => "maxresdefault",
        }
    }

    /// Short config name.
    pub fn name(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::Mq => "mq",
            ThumbnailQuality::Hq => "hq",
            ThumbnailQuality::Sd => "sd",
            ThumbnailQuality::MaxRes => "maxres",
        }
    }

    /// Next lower tier, or `None` at the bottom.
    pub fn fallback(self) -> Option<ThumbnailQuality> {
        match self {
            ThumbnailQuality::MaxRes => Some(ThumbnailQuality::Sd),
            ThumbnailQuality::Sd => Some(ThumbnailQuality::Hq),
            ThumbnailQuality::Hq => Some(ThumbnailQuality::Mq),
            ThumbnailQuality::Mq => Some(ThumbnailQuality::Default),
            ThumbnailQuality::Default => None,
        }
    }

    /// Whether the platform generates this variant for every video.
    pub fn always_available(self) -> bool {
        !matches!(self, ThumbnailQuality::Sd | ThumbnailQuality::MaxRes)
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized thumbnail quality name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown thumbnail quality '{0}'. Use 'default', 'mq', 'hq', 'sd' or 'maxres'")]
pub struct UnknownQuality(pub String);

impl FromStr for ThumbnailQuality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "low" => Ok(ThumbnailQuality::Default),
            "mq" | "mqdefault" | "medium" => Ok(ThumbnailQuality::Mq),
            "hq" | "hqdefault" | "high" => Ok(ThumbnailQuality::Hq),
            "sd" | "sddefault" | "standard" => Ok(ThumbnailQuality::Sd),
            "maxres" | "maxresdefault" => Ok(ThumbnailQuality::MaxRes),
            _ => Err(UnknownQuality(s.to_string())),
        }
    }
}
