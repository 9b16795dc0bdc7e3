//! Decoded pixel buffers.

/// Bytes per pixel in a [`PixelBuffer`] (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded image in RGBA8 layout, row-major, top-left origin.
///
/// The buffer is immutable once built. The constructor guarantees both
/// dimensions are non-zero and `data.len() == width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, validating the dimensions against the data length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::Empty { width, height });
        }

        let expected = width as u64 * height as u64 * BYTES_PER_PIXEL as u64;
        if data.len() as u64 != expected {
            return Err(BufferError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BufferError> {
        let pixels = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(pixels * BYTES_PER_PIXEL).collect();
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Red, green and blue channels of the pixel at `(x, y)`. Alpha is never read.
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

impl TryFrom<image::RgbaImage> for PixelBuffer {
    type Error = BufferError;

    fn try_from(image: image::RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }
}

/// Reasons a byte slice cannot be used as a [`PixelBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("{width}x{height} RGBA image needs {expected} bytes, got {actual}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: u64,
        actual: usize,
    },
}
