//! Error type for the conversion pipeline.

use crate::ascii::BufferError;
use crate::source::LoadError;

/// Errors that can occur while converting an image to ASCII art.
///
/// Load failures and parameter failures are kept as separate variants so
/// callers can tell a missing or undecodable image apart from a bad request.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The pixel source could not produce a buffer. Surfaced unchanged.
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Invalid {name}: {value} (must be at least 1)")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Value that was rejected
        value: u32,
    },

    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(#[from] BufferError),

    #[error("Ragged chunk grid: row {row} has {actual} values, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
