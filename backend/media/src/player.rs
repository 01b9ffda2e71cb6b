//! Embedded player for the episode detail page.

use podsite_core::Episode;
use podsite_youtube::VideoReferenceResolver;
use serde::Serialize;

/// Permissions granted to the embedded player iframe.
pub const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum Player {
    Embed {
        src: String,
        title: String,
        allow: &'static str,
        watch_url: String,
    },
    /// No usable video link; the page shows a "no preview" panel.
    Unavailable,
}

impl Player {
    pub fn src(&self) -> Option<&str> {
        match self {
            Player::Embed { src, .. } => Some(src),
            Player::Unavailable => None,
        }
    }
}

pub fn episode_player(episode: &Episode, resolver: &VideoReferenceResolver) -> Player {
    match resolver.describe(episode.youtube_url.as_deref()) {
        Some(video) => Player::Embed {
            src: video.embed_url,
            title: episode.title.clone(),
            allow: PLAYER_ALLOW,
            watch_url: video.watch_url,
        },
        None => Player::Unavailable,
    }
}
