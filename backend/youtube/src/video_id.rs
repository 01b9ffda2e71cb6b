//! Video identifier extraction.
//!
//! Recognizes the share, embed and watch link shapes used by the video
//! platform and captures the identifier that follows the marker:
//!
//! - `youtu.be/<id>`
//! - `/v/<id>`
//! - `/u/<c>/<id>`
//! - `/embed/<id>`
//! - `watch?v=<id>` and `&v=<id>`
//!
//! The segment ends at the first `#`, `&`, `?` or end of input and is only
//! accepted when it is exactly [`VIDEO_ID_LEN`] UTF-16 code units long, the
//! same measure the site's browser code uses.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Length of a canonical video identifier.
pub const VIDEO_ID_LEN: usize = 11;

// The prefix is greedy, so when several markers appear the last one wins.
// Neither the prefix nor the wildcard in `youtu?be/` crosses a line
// terminator (`\n`, `\r`, U+2028, U+2029).
// `\w` is spelled out as ASCII so that `u/<c>/` only accepts one word byte.
static VIDEO_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[^\n\r\x{2028}\x{2029}]*(youtu[^\n\r\x{2028}\x{2029}]be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*)",
    )
    .unwrap()
});

/// A canonical video identifier, [`VIDEO_ID_LEN`] UTF-16 units long.
///
/// Only obtainable through [`resolve`] / [`extract_id`], so holding one means
/// the extraction rules were satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why no identifier could be derived from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no video URL given")]
    Missing,

    #[error("not a recognized video link")]
    Unrecognized,

    #[error("video id segment {segment:?} has length {length}, expected 11")]
    InvalidLength { segment: String, length: usize },
}

/// Extract the video identifier, reporting why extraction failed.
pub fn resolve(url: Option<&str>) -> Result<VideoId, ResolveError> {
    let url = match url {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ResolveError::Missing),
    };

    let caps = VIDEO_URL_RE
        .captures(url)
        .ok_or(ResolveError::Unrecognized)?;
    let segment = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

    let length = segment.encode_utf16().count();
    if length != VIDEO_ID_LEN {
        debug!(segment, length, "Rejected video id segment");
        return Err(ResolveError::InvalidLength {
            segment: segment.to_string(),
            length,
        });
    }

    Ok(VideoId(segment.to_string()))
}

/// Extract the video identifier, or `None` for any absent, unrecognized or
/// malformed input.
pub fn extract_id(url: Option<&str>) -> Option<VideoId> {
    resolve(url).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    fn id_of(url: &str) -> Option<String> {
        extract_id(Some(url)).map(VideoId::into_string)
    }

    #[test]
    fn watch_link() {
        assert_eq!(id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(), Some(ID));
    }

    #[test]
    fn short_link() {
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some(ID));
    }

    #[test]
    fn embed_link_ignores_trailing_query() {
        assert_eq!(
            id_of("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn v_path_link() {
        assert_eq!(
            id_of("https://www.youtube.com/v/dQw4w9WgXcQ?version=3").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn user_channel_link() {
        assert_eq!(
            id_of("http://www.youtube.com/user/Scobleizer#p/u/1/1p3vcRhsYGo").as_deref(),
            Some("1p3vcRhsYGo")
        );
    }

    #[test]
    fn ampersand_v_parameter() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?feature=player_embedded&v=dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn segment_stops_at_delimiters() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
            Some(ID)
        );
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ#t=10").as_deref(), Some(ID));
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ?si=abc").as_deref(), Some(ID));
    }

    #[test]
    fn absent_and_empty_yield_nothing() {
        assert_eq!(extract_id(None), None);
        assert_eq!(extract_id(Some("")), None);
        assert_eq!(resolve(None), Err(ResolveError::Missing));
        assert_eq!(resolve(Some("")), Err(ResolveError::Missing));
    }

    #[test]
    fn unrelated_url_is_unrecognized() {
        assert_eq!(id_of("https://example.com/not-a-video"), None);
        assert_eq!(
            resolve(Some("https://example.com/not-a-video")),
            Err(ResolveError::Unrecognized)
        );
    }

    #[test]
    fn short_segment_is_rejected() {
        assert_eq!(id_of("https://youtu.be/short"), None);
        assert_eq!(
            resolve(Some("https://youtu.be/short")),
            Err(ResolveError::InvalidLength {
                segment: "short".to_string(),
                length: 5,
            })
        );
    }

    #[test]
    fn long_segment_is_rejected() {
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQX"), None);
        assert!(matches!(
            resolve(Some("https://youtu.be/dQw4w9WgXcQX")),
            Err(ResolveError::InvalidLength { length: 12, .. })
        ));
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert!(matches!(
            resolve(Some("https://www.youtube.com/watch?v=")),
            Err(ResolveError::InvalidLength { length: 0, .. })
        ));
    }

    #[test]
    fn prefix_does_not_cross_line_terminators() {
        assert_eq!(id_of("x\rhttps://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(id_of("x\nhttps://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(id_of("x\u{2028}https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(id_of("x\u{2029}https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(id_of("https://youtu\rbe/dQw4w9WgXcQ"), None);
        // The segment itself runs on past a line break.
        assert!(matches!(
            resolve(Some("https://youtu.be/dQw4w9WgXcQ\nx")),
            Err(ResolveError::InvalidLength { length: 13, .. })
        ));
    }

    #[test]
    fn length_counts_utf16_units() {
        // Five astral characters are ten units, plus one ASCII character.
        assert_eq!(
            id_of("https://youtu.be/\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}a").as_deref(),
            Some("\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}a")
        );

        let eleven = "\u{1F600}".repeat(11);
        assert!(matches!(
            resolve(Some(&format!("https://youtu.be/{eleven}"))),
            Err(ResolveError::InvalidLength { length: 22, .. })
        ));
    }

    #[test]
    fn extraction_is_repeatable() {
        let url = Some("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(extract_id(url), extract_id(url));
        assert_eq!(resolve(Some("nope")), resolve(Some("nope")));
    }

    #[test]
    fn display_and_serialize_are_bare_id() {
        let id = extract_id(Some("https://youtu.be/dQw4w9WgXcQ")).unwrap();
        assert_eq!(id.to_string(), ID);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{ID}\""));
    }
}
