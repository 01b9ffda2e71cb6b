//! `podsite episode <FILE>`
//!
//! Reads episode documents exported from the content backend and shows
//! which artwork and player each episode page would use. The newest
//! featured episode is marked as the home page lead.

use std::path::Path;

use anyhow::{Context, Result};
use podsite_core::{latest_featured, parse_episodes, sort_latest_first, Episode};
use podsite_media::{episode_artwork, episode_player, Artwork, Player};
use podsite_youtube::VideoReferenceResolver;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::output::{field, heading, supports_color};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeMedia<'a> {
    pub id: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<&'a str>,
    pub featured: bool,
    /// Shown in the home page lead slot.
    pub lead: bool,
    pub artwork: Artwork,
    pub player: Player,
}

pub fn media_for<'a>(
    episode: &'a Episode,
    resolver: &VideoReferenceResolver,
    lead: bool,
) -> EpisodeMedia<'a> {
    EpisodeMedia {
        id: &episode.id,
        title: &episode.title,
        slug: episode.slug(),
        featured: episode.featured,
        lead,
        artwork: episode_artwork(episode, resolver),
        player: episode_player(episode, resolver),
    }
}

/// Media for every episode, marking the latest featured one as lead.
pub fn media_list<'a>(
    episodes: &'a [Episode],
    resolver: &VideoReferenceResolver,
) -> Vec<EpisodeMedia<'a>> {
    let lead_id = latest_featured(episodes).map(|e| e.id.as_str());
    episodes
        .iter()
        .map(|e| media_for(e, resolver, Some(e.id.as_str()) == lead_id))
        .collect()
}

async fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read episodes from stdin")?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read episode file: {}", path.display()))
}

pub async fn run(resolver: &VideoReferenceResolver, path: &Path, json: bool) -> Result<()> {
    let raw = read_input(path).await?;
    let mut episodes = parse_episodes(&raw)
        .with_context(|| format!("Failed to decode episodes from {}", path.display()))?;
    sort_latest_first(&mut episodes);
    info!(count = episodes.len(), "Loaded episodes");

    let media = media_list(&episodes, resolver);

    if json {
        println!("{}", serde_json::to_string_pretty(&media)?);
        return Ok(());
    }

    if media.is_empty() {
        println!("No episodes found.");
        return Ok(());
    }

    let color = supports_color();
    let blocks: Vec<_> = media.iter().map(|m| render(m, color)).collect();
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

pub fn render(media: &EpisodeMedia<'_>, color: bool) -> String {
    let artwork = match &media.artwork {
        Artwork::MainImage { image } => format!("main image {}", image.asset.reference),
        Artwork::VideoThumbnail { url } => url.clone(),
        Artwork::Placeholder => "placeholder".to_string(),
    };
    let player = match &media.player {
        Player::Embed { src, .. } => src.clone(),
        Player::Unavailable => "no video preview available".to_string(),
    };

    let title = if media.lead {
        format!("{} (lead)", media.title)
    } else if media.featured {
        format!("{} (featured)", media.title)
    } else {
        media.title.to_string()
    };
    let mut lines = vec![heading(&title, color)];
    if let Some(slug) = media.slug {
        lines.push(field("slug", slug, color));
    }
    lines.push(field("artwork", &artwork, color));
    lines.push(field("player", &player, color));
    lines.join("\n")
}
