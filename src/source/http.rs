//! HttpSource - downloads and decodes images from http(s) URLs.

use std::time::Duration;

use futures_util::StreamExt;

use super::{decode, LoadError, PixelSource};
use crate::ascii::PixelBuffer;

/// Default timeout for the whole request (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default cap on downloaded image size (32 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 32 * 1024 * 1024;

/// Fetches an image over HTTP and decodes it.
///
/// A single GET per load; failures are not retried.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http_client: reqwest::Client,
    max_bytes: u64,
}

impl HttpSource {
    /// Create a source with the default timeout and size limit.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_limits(DEFAULT_TIMEOUT, DEFAULT_MAX_BYTES)
    }

    /// Create a source with an explicit request timeout and body size limit.
    pub fn with_limits(timeout: Duration, max_bytes: u64) -> Result<Self, LoadError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self {
            http_client,
            max_bytes,
        })
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Download the response body, enforcing the size limit while streaming.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            log::warn!("Image download from {} failed with status {}", url, status);
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let too_large = || LoadError::TooLarge {
            reference: url.to_string(),
            limit: self.max_bytes,
        };

        if response.content_length().is_some_and(|len| len > self.max_bytes) {
            return Err(too_large());
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        log::debug!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

impl PixelSource for HttpSource {
    async fn load(&self, reference: &str) -> Result<PixelBuffer, LoadError> {
        let bytes = self.fetch(reference).await?;
        decode(&bytes)
    }
}
