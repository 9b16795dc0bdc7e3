//! Chunk partitioning and per-chunk brightness.

use super::pixel::PixelBuffer;
use crate::error::AsciiError;

/// Mean brightness of every chunk of an image, row-major.
///
/// Rows run top-to-bottom and columns left-to-right, matching the order the
/// renderer emits lines and characters.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl ChunkGrid {
    /// Build a grid from explicit rows of brightness values.
    ///
    /// Every row must have the same length as the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AsciiError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);

        for (row, line) in rows.iter().enumerate() {
            if line.len() != cols {
                return Err(AsciiError::RaggedGrid {
                    row,
                    expected: cols,
                    actual: line.len(),
                });
            }
            values.extend_from_slice(line);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    /// Number of chunk rows (output lines).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of chunk columns (characters per line).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Brightness of the chunk at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    /// One row of brightness values.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Iterate rows top-to-bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| &self.values[r * self.cols..(r + 1) * self.cols])
    }
}

/// Brightness of a single pixel: the unweighted mean of red, green and blue.
#[inline]
pub fn pixel_brightness(rgb: [u8; 3]) -> f64 {
    (rgb[0] as f64 + rgb[1] as f64 + rgb[2] as f64) / 3.0
}

/// Partition `buffer` into `chunk_width x chunk_height` chunks and average each.
///
/// Chunk origins step from the top-left corner. The last chunk in each
/// dimension is clipped to the image bounds when the image size is not a
/// multiple of the chunk size, and is averaged over its in-bounds pixels only.
/// A chunk larger than the image degenerates to a single chunk.
///
/// The resulting grid has `ceil(height / chunk_height)` rows and
/// `ceil(width / chunk_width)` columns.
///
/// # Errors
/// Returns [`AsciiError::InvalidParameter`] if either chunk dimension is zero.
///
/// # Example
/// ```ignore
/// let grid = compute_chunk_grid(&buffer, 10, 20)?;
/// assert_eq!(grid.cols(), buffer.width().div_ceil(10) as usize);
/// ```
pub fn compute_chunk_grid(
    buffer: &PixelBuffer,
    chunk_width: u32,
    chunk_height: u32,
) -> Result<ChunkGrid, AsciiError> {
    if chunk_width == 0 {
        return Err(AsciiError::InvalidParameter {
            name: "chunk_width",
            value: chunk_width,
        });
    }
    if chunk_height == 0 {
        return Err(AsciiError::InvalidParameter {
            name: "chunk_height",
            value: chunk_height,
        });
    }

    let img_width = buffer.width();
    let img_height = buffer.height();
    let cols = img_width.div_ceil(chunk_width) as usize;
    let rows = img_height.div_ceil(chunk_height) as usize;

    let mut values = Vec::with_capacity(rows * cols);

    for y in (0..img_height).step_by(chunk_height as usize) {
        for x in (0..img_width).step_by(chunk_width as usize) {
            values.push(chunk_brightness(buffer, x, y, chunk_width, chunk_height));
        }
    }

    debug_assert_eq!(values.len(), rows * cols);

    Ok(ChunkGrid { rows, cols, values })
}

/// Average brightness of the chunk whose top-left pixel is `(start_x, start_y)`.
///
/// The origin must lie inside the image, which guarantees at least one pixel.
fn chunk_brightness(
    buffer: &PixelBuffer,
    start_x: u32,
    start_y: u32,
    chunk_width: u32,
    chunk_height: u32,
) -> f64 {
    let end_x = start_x.saturating_add(chunk_width).min(buffer.width());
    let end_y = start_y.saturating_add(chunk_height).min(buffer.height());

    // Channel sums stay integral so the mean does not depend on scan order
    let mut sum = 0u64;
    let mut count = 0u64;

    for py in start_y..end_y {
        for px in start_x..end_x {
            let [r, g, b] = buffer.rgb(px, py);
            sum += r as u64 + g as u64 + b as u64;
            count += 1;
        }
    }

    sum as f64 / (3 * count) as f64
}
