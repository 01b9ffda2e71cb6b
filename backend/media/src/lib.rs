//! Media selection for episode cards and detail pages.
//!
//! Decides what goes in the artwork slot and whether an embedded player can
//! be shown, given an episode document and the configured video resolver.

pub mod artwork;
pub mod player;

pub use artwork::{episode_artwork, Artwork};
pub use player::{episode_player, Player, PLAYER_ALLOW};
