//! FileSource - decodes images from the local filesystem.

use std::path::Path;

use super::{decode, LoadError, PixelSource};
use crate::ascii::PixelBuffer;

/// Reads an image file and decodes it. The format is guessed from content.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

impl PixelSource for FileSource {
    async fn load(&self, reference: &str) -> Result<PixelBuffer, LoadError> {
        let path = Path::new(reference);
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        decode(&bytes)
    }
}
