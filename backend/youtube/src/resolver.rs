//! URL derivation from a resolved video identifier.

use serde::Serialize;

use crate::thumbnail::ThumbnailQuality;
use crate::video_id::{extract_id, resolve, ResolveError, VideoId};

const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";
const EMBED_BASE: &str = "https://www.youtube.com/embed";
const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

impl VideoId {
    /// Thumbnail image URL for the given tier.
    pub fn thumbnail_url(&self, quality: ThumbnailQuality) -> String {
        format!("{THUMBNAIL_HOST}/{}/{}.jpg", self.as_str(), quality.file_stem())
    }

    /// Embeddable player URL, without player parameters.
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE}/{}", self.as_str())
    }

    /// Canonical watch page URL.
    pub fn watch_url(&self) -> String {
        format!("{WATCH_BASE}{}", self.as_str())
    }
}

/// Max-resolution thumbnail URL for a video link.
pub fn thumbnail_url(url: Option<&str>) -> Option<String> {
    thumbnail_url_with(url, ThumbnailQuality::MaxRes)
}

/// Thumbnail URL for a video link at an explicit tier.
pub fn thumbnail_url_with(url: Option<&str>, quality: ThumbnailQuality) -> Option<String> {
    extract_id(url).map(|id| id.thumbnail_url(quality))
}

/// Embeddable player URL for a video link.
pub fn embed_url(url: Option<&str>) -> Option<String> {
    extract_id(url).map(|id| id.embed_url())
}

/// Watch page URL for a video link.
pub fn watch_url(url: Option<&str>) -> Option<String> {
    extract_id(url).map(|id| id.watch_url())
}

/// Everything derivable from one video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReference {
    pub id: VideoId,
    pub thumbnail_url: String,
    pub embed_url: String,
    pub watch_url: String,
}

/// Resolver carrying the configured thumbnail tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoReferenceResolver {
    quality: ThumbnailQuality,
}

impl VideoReferenceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(quality: ThumbnailQuality) -> Self {
        Self { quality }
    }

    pub fn quality(&self) -> ThumbnailQuality {
        self.quality
    }

    pub fn extract_id(&self, url: Option<&str>) -> Option<VideoId> {
        extract_id(url)
    }

    pub fn resolve(&self, url: Option<&str>) -> Result<VideoId, ResolveError> {
        resolve(url)
    }

    pub fn thumbnail_url(&self, url: Option<&str>) -> Option<String> {
        thumbnail_url_with(url, self.quality)
    }

    pub fn embed_url(&self, url: Option<&str>) -> Option<String> {
        embed_url(url)
    }

    pub fn watch_url(&self, url: Option<&str>) -> Option<String> {
        watch_url(url)
    }

    /// Resolve once and derive all URLs from the same identifier.
    pub fn describe(&self, url: Option<&str>) -> Option<VideoReference> {
        self.resolve(url).ok().map(|id| self.reference_for(id))
    }

    pub fn reference_for(&self, id: VideoId) -> VideoReference {
        VideoReference {
            thumbnail_url: id.thumbnail_url(self.quality),
            embed_url: id.embed_url(),
            watch_url: id.watch_url(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCH: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn embed_url_from_watch_link() {
        assert_eq!(
            embed_url(Some(WATCH)).as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn thumbnail_defaults_to_maxres() {
        assert_eq!(
            thumbnail_url(Some("https://youtu.be/dQw4w9WgXcQ")).as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
        );
    }

    #[test]
    fn thumbnail_at_explicit_tier() {
        assert_eq!(
            thumbnail_url_with(Some(WATCH), ThumbnailQuality::Hq).as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn empty_input_derives_nothing() {
        assert_eq!(thumbnail_url(Some("")), None);
        assert_eq!(embed_url(Some("")), None);
        assert_eq!(watch_url(None), None);
    }

    #[test]
    fn derivations_track_extraction() {
        let inputs = [
            None,
            Some(""),
            Some(WATCH),
            Some("https://youtu.be/short"),
            Some("https://example.com/not-a-video"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"),
        ];
        for url in inputs {
            let id = extract_id(url);
            let thumb = thumbnail_url(url);
            let embed = embed_url(url);
            assert_eq!(id.is_none(), thumb.is_none(), "{url:?}");
            assert_eq!(id.is_none(), embed.is_none(), "{url:?}");
            if let Some(id) = id {
                assert!(thumb.unwrap().contains(&format!("/{id}/")));
                assert!(embed.unwrap().ends_with(&format!("/{id}")));
            }
        }
    }

    #[test]
    fn resolver_uses_configured_quality() {
        let resolver = VideoReferenceResolver::with_quality(ThumbnailQuality::Sd);
        assert_eq!(
            resolver.thumbnail_url(Some(WATCH)).as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/sddefault.jpg")
        );
        assert_eq!(VideoReferenceResolver::new().quality(), ThumbnailQuality::MaxRes);
    }

    #[test]
    fn resolver_methods_match_free_functions() {
        let resolver = VideoReferenceResolver::with_quality(ThumbnailQuality::Mq);
        let short = Some("https://youtu.be/dQw4w9WgXcQ?t=3");

        assert_eq!(resolver.extract_id(short).unwrap().as_str(), "dQw4w9WgXcQ");
        assert_eq!(resolver.resolve(short), resolve(short));
        assert_eq!(
            resolver.embed_url(short).as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(resolver.watch_url(short).as_deref(), Some(WATCH));

        let bad = Some("https://youtu.be/short");
        assert_eq!(resolver.extract_id(bad), None);
        assert_eq!(resolver.embed_url(bad), None);
        assert_eq!(resolver.watch_url(None), None);
        assert!(matches!(
            resolver.resolve(bad),
            Err(ResolveError::InvalidLength { length: 5, .. })
        ));
    }

    #[test]
    fn describe_collects_all_urls() {
        let reference = VideoReferenceResolver::new().describe(Some(WATCH)).unwrap();
        assert_eq!(reference.id.as_str(), "dQw4w9WgXcQ");
        assert_eq!(reference.watch_url, WATCH);
        assert_eq!(reference.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");

        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["id"], "dQw4w9WgXcQ");
        assert_eq!(
            json["thumbnailUrl"],
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn describe_rejects_bad_links() {
        assert!(VideoReferenceResolver::new()
            .describe(Some("https://youtu.be/short"))
            .is_none());
    }
}
