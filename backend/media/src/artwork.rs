//! Artwork slot for episode cards.

use podsite_core::{Episode, ImageAsset};
use podsite_youtube::VideoReferenceResolver;
use serde::Serialize;
use tracing::debug;

/// What to render in an episode's artwork slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Artwork {
    /// Uploaded cover image; the caller builds its URL.
    MainImage { image: ImageAsset },
    /// Video thumbnail derived from the episode's video link.
    VideoThumbnail { url: String },
    /// Neither source is usable.
    Placeholder,
}

impl Artwork {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Artwork::Placeholder)
    }
}

/// Pick the artwork for an episode: main image, then video thumbnail, then
/// placeholder. A video link that does not resolve falls through to the
/// placeholder rather than an empty image source.
pub fn episode_artwork(episode: &Episode, resolver: &VideoReferenceResolver) -> Artwork {
    if let Some(image) = &episode.main_image {
        return Artwork::MainImage {
            image: image.clone(),
        };
    }

    match resolver.thumbnail_url(episode.youtube_url.as_deref()) {
        Some(url) => Artwork::VideoThumbnail { url },
        None => {
            if episode.youtube_url.is_some() {
                debug!(episode = %episode.id, "Video link did not resolve; using placeholder artwork");
            }
            Artwork::Placeholder
        }
    }
}
