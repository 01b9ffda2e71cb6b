pub mod error;
pub mod types;

pub use error::PodsiteError;
pub use types::{
    featured, latest, latest_featured, parse_episodes, sort_latest_first, AssetRef, Episode,
    ImageAsset, Slug,
};
