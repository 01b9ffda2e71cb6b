//! Structured logging for podsite.
//!
//! Console output plus optional daily-rotated NDJSON files.

pub mod logger;

pub use logger::{init_logger, LOG_FILE_NAME};
