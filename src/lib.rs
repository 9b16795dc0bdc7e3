//! image-to-ascii library crate.
//!
//! Converts raster images into ASCII art by averaging RGB brightness over
//! rectangular pixel chunks and mapping each chunk onto a 10-glyph ramp.
//!
//! ```ignore
//! use image_to_ascii::{image_to_ascii, AutoSource, ConvertOptions};
//!
//! let source = AutoSource::new()?;
//! let art = image_to_ascii(&source, "photo.jpg", &ConvertOptions::new().with_chunk_width(4)).await?;
//! print!("{}", art);
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod source;

pub use convert::{
    buffer_to_ascii, image_to_ascii, ConvertOptions, DEFAULT_CHUNK_HEIGHT, DEFAULT_CHUNK_WIDTH,
};
pub use error::AsciiError;
pub use source::{AutoSource, FileSource, HttpSource, LoadError, PixelSource};
