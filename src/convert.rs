//! Top-level conversion: image reference in, ASCII art out.

use crate::ascii::{compute_chunk_grid, render, PixelBuffer};
use crate::error::AsciiError;
use crate::source::PixelSource;

/// Chunk width used when the caller does not pick one.
pub const DEFAULT_CHUNK_WIDTH: u32 = 10;

/// Chunk height used when the caller does not pick one.
/// Twice the width, since terminal cells are roughly twice as tall as wide.
pub const DEFAULT_CHUNK_HEIGHT: u32 = 20;

/// Options for a single conversion.
///
/// An omitted (`None`) or zero chunk dimension falls back to its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub chunk_width: Option<u32>,
    pub chunk_height: Option<u32>,
    pub reverse: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_width(mut self, chunk_width: u32) -> Self {
        self.chunk_width = Some(chunk_width);
        self
    }

    pub fn with_chunk_height(mut self, chunk_height: u32) -> Self {
        self.chunk_height = Some(chunk_height);
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Effective `(chunk_width, chunk_height)` after defaults are applied.
    pub fn chunk_size(&self) -> (u32, u32) {
        let width = self
            .chunk_width
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_CHUNK_WIDTH);
        let height = self
            .chunk_height
            .filter(|&h| h > 0)
            .unwrap_or(DEFAULT_CHUNK_HEIGHT);
        (width, height)
    }
}

/// Convert an already-decoded buffer to ASCII art.
pub fn buffer_to_ascii(buffer: &PixelBuffer, options: &ConvertOptions) -> Result<String, AsciiError> {
    let (chunk_width, chunk_height) = options.chunk_size();
    let grid = compute_chunk_grid(buffer, chunk_width, chunk_height)?;

    log::debug!(
        "Chunked {}x{} image into {}x{} grid ({}x{} px chunks)",
        buffer.width(),
        buffer.height(),
        grid.cols(),
        grid.rows(),
        chunk_width,
        chunk_height
    );

    Ok(render(&grid, options.reverse))
}

/// Load an image through `source` and convert it to ASCII art.
///
/// The only suspension point is the source load. Load failures are
/// returned unchanged as [`AsciiError::Load`]; there is no retry and no
/// partial output.
///
/// # Example
/// ```ignore
/// let source = AutoSource::new()?;
/// let art = image_to_ascii(&source, "photo.jpg", &ConvertOptions::new()).await?;
/// print!("{}", art);
/// ```
pub async fn image_to_ascii<S: PixelSource>(
    source: &S,
    reference: &str,
    options: &ConvertOptions,
) -> Result<String, AsciiError> {
    let buffer = source.load(reference).await?;
    log::info!(
        "Loaded {} ({}x{})",
        reference,
        buffer.width(),
        buffer.height()
    );
    buffer_to_ascii(&buffer, options)
}
