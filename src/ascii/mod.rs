//! ASCII renderer module for converting pixel buffers to ASCII art.
//!
//! The pipeline has three stages:
//!
//! 1. **Chunking** - partition the image into rectangular chunks and average
//!    the RGB brightness of each ([`compute_chunk_grid`])
//! 2. **Character mapping** - quantize each chunk's brightness onto a fixed
//!    10-glyph ramp ([`map_brightness_to_char`])
//! 3. **Rendering** - one character per chunk, one line per chunk row ([`render`])
//!
//! Every stage is synchronous and pure.

mod charset;
mod chunks;
mod mapping;
mod pixel;
mod render;

pub use charset::{RampOrder, RAMP, RAMP_LEN};
pub use chunks::{compute_chunk_grid, pixel_brightness, ChunkGrid};
pub use mapping::{brightness_index, map_brightness_to_char, map_to_chars_into};
pub use pixel::{BufferError, PixelBuffer, BYTES_PER_PIXEL};
pub use render::{render, render_into, LINE_SEPARATOR};
