//! Video link resolution for episode pages.
//!
//! Turns a stored video-sharing URL into its 11-character identifier and
//! derives thumbnail, embed and watch URLs from it. All functions are pure;
//! failures collapse to `None` unless [`resolve`] is used.

pub mod resolver;
pub mod thumbnail;
pub mod video_id;

pub use resolver::{
    embed_url, thumbnail_url, thumbnail_url_with, watch_url, VideoReference,
    VideoReferenceResolver,
};
pub use thumbnail::{ThumbnailQuality, UnknownQuality};
pub use video_id::{extract_id, resolve, ResolveError, VideoId, VIDEO_ID_LEN};
