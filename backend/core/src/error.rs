use thiserror::Error;

/// Top-level error type for podsite.
#[derive(Debug, Error)]
pub enum PodsiteError {
    #[error("content decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
