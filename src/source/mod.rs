//! Pixel sources: acquiring a decoded [`PixelBuffer`] for an image reference.
//!
//! The conversion pipeline only depends on the [`PixelSource`] trait. The
//! concrete sources here read local files ([`FileSource`]), download http(s)
//! URLs ([`HttpSource`]), or pick between the two by the shape of the
//! reference ([`AutoSource`]).

mod error;
mod file;
mod http;

use std::future::Future;

pub use error::LoadError;
pub use file::FileSource;
pub use http::{HttpSource, DEFAULT_MAX_BYTES, DEFAULT_TIMEOUT};

use crate::ascii::PixelBuffer;

/// Supplies a decoded pixel buffer for an image reference.
///
/// `load` resolves exactly once, to either a buffer or a [`LoadError`].
pub trait PixelSource {
    fn load(&self, reference: &str) -> impl Future<Output = Result<PixelBuffer, LoadError>> + Send;
}

/// Decode encoded image bytes (PNG, JPEG, GIF, ...) into an RGBA buffer.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, LoadError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    log::debug!("Decoded {}x{} image", rgba.width(), rgba.height());
    Ok(PixelBuffer::try_from(rgba)?)
}

/// Check whether a reference should be fetched over HTTP.
pub fn is_url(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Routes http(s) URLs to an [`HttpSource`] and everything else to a [`FileSource`].
#[derive(Debug, Clone)]
pub struct AutoSource {
    file: FileSource,
    http: HttpSource,
}

impl AutoSource {
    /// Create a source with default HTTP limits.
    pub fn new() -> Result<Self, LoadError> {
        Ok(Self::with_http(HttpSource::new()?))
    }

    /// Create a source that downloads through the given HTTP source.
    pub fn with_http(http: HttpSource) -> Self {
        Self {
            file: FileSource::new(),
            http,
        }
    }
}

impl PixelSource for AutoSource {
    async fn load(&self, reference: &str) -> Result<PixelBuffer, LoadError> {
        if is_url(reference) {
            log::debug!("Fetching {} over HTTP", reference);
            self.http.load(reference).await
        } else {
            self.file.load(reference).await
        }
    }
}
