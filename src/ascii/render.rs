//! Assembling a chunk grid into ASCII art text.

use super::charset::RampOrder;
use super::chunks::ChunkGrid;
use super::mapping::brightness_index;

/// Line separator emitted after every row, including the last.
pub const LINE_SEPARATOR: char = '\n';

/// Render a chunk grid as text: one line per row, one character per chunk.
///
/// Every line, including the final one, ends with [`LINE_SEPARATOR`].
pub fn render(grid: &ChunkGrid, reverse: bool) -> String {
    let mut out = String::new();
    render_into(grid, reverse, &mut out);
    out
}

/// Render a chunk grid into an existing buffer to avoid allocation.
///
/// The buffer is cleared first.
///
/// # Returns
/// The number of lines written.
pub fn render_into(grid: &ChunkGrid, reverse: bool, buffer: &mut String) -> usize {
    buffer.clear();
    // Every ramp glyph is a single byte
    buffer.reserve(grid.rows() * (grid.cols() + 1));

    let order = RampOrder::from_reverse(reverse);
    for row in grid.iter_rows() {
        buffer.extend(row.iter().map(|&b| order.glyph(brightness_index(b))));
        buffer.push(LINE_SEPARATOR);
    }

    grid.rows()
}
