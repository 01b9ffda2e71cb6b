//! `podsite resolve <URL>`

use anyhow::Result;
use podsite_youtube::{VideoReference, VideoReferenceResolver};
use tracing::debug;

use crate::output::{field, note_error, supports_color};

/// Resolve one link and print what was derived. Returns whether an
/// identifier was found.
pub fn run(resolver: &VideoReferenceResolver, url: &str, json: bool, explain: bool) -> Result<bool> {
    debug!(url, quality = %resolver.quality(), "Resolving video link");

    let reference = match resolver.resolve(Some(url)) {
        Ok(id) => resolver.reference_for(id),
        Err(reason) => {
            if json {
                let body = serde_json::json!({ "url": url, "error": reason.to_string() });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else if explain {
                note_error(&reason.to_string());
            } else {
                note_error("no video id found");
            }
            return Ok(false);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reference)?);
    } else {
        println!("{}", render(&reference, supports_color()));
    }
    Ok(true)
}

pub fn render(reference: &VideoReference, color: bool) -> String {
    [
        field("id", reference.id.as_str(), color),
        field("thumbnail", &reference.thumbnail_url, color),
        field("embed", &reference.embed_url, color),
        field("watch", &reference.watch_url, color),
    ]
    .join("\n")
}
