//! Error type for pixel sources.

use std::path::PathBuf;

use crate::ascii::BufferError;

/// Errors that can occur while acquiring a decoded image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read image file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image download from {url} failed with status {status}")]
    Status {
        /// URL that was requested
        url: String,
        /// HTTP status code returned by the server
        status: u16,
    },

    #[error("Image at {reference} exceeds the {limit} byte limit")]
    TooLarge {
        reference: String,
        /// Maximum accepted body size in bytes
        limit: u64,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decoded image is unusable: {0}")]
    Buffer(#[from] BufferError),
}
