use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PodsiteError;

/// An `episode` document as returned by the content backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Free-form display duration, e.g. "42 min".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<ImageAsset>,
}

impl Episode {
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_ref().map(|s| s.current.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// Image field referencing an uploaded asset. URL building happens in the
/// image pipeline, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub asset: AssetRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Episode>),
    One(Box<Episode>),
}

/// Decode episode documents from a query result: an array, a single
/// document, or `null` for a lookup that found nothing.
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>, PodsiteError> {
    let parsed: Option<OneOrMany> = serde_json::from_str(json)?;
    let episodes = match parsed {
        Some(OneOrMany::Many(v)) => v,
        Some(OneOrMany::One(e)) => vec![*e],
        None => Vec::new(),
    };
    debug!(count = episodes.len(), "Decoded episode documents");
    Ok(episodes)
}

/// Order by publish date, newest first. Undated episodes go last and keep
/// their relative order.
pub fn sort_latest_first(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

/// Episodes flagged as featured, in input order.
pub fn featured(episodes: &[Episode]) -> Vec<&Episode> {
    episodes.iter().filter(|e| e.featured).collect()
}

/// The most recently published episode. Ties keep the earlier entry.
pub fn latest<'a, I>(episodes: I) -> Option<&'a Episode>
where
    I: IntoIterator<Item = &'a Episode>,
{
    let mut best: Option<&Episode> = None;
    for ep in episodes {
        match best {
            Some(b) if ep.published_at <= b.published_at => {}
            _ => best = Some(ep),
        }
    }
    best
}

/// The newest featured episode, the lead slot on the home page.
pub fn latest_featured(episodes: &[Episode]) -> Option<&Episode> {
    latest(featured(episodes))
}
