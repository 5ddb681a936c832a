use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    ZeroDimension { width: usize, height: usize },
    SizeOverflow { width: usize, height: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be at least 1x1: {}x{}", width, height)
            }
            Self::SizeOverflow { width, height } => {
                write!(
                    f,
                    "image of {}x{} pixels exceeds the addressable buffer size",
                    width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major RGB byte buffer: pixel (x, y) starts at `(x + y * width) * 3`,
/// rows sweep top to bottom, columns left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer. The byte size is computed with checked
    /// arithmetic so oversized dimensions surface as an error instead of
    /// an unchecked allocation.
    pub fn new(width: usize, height: usize) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::ZeroDimension { width, height });
        }

        let byte_count = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(PixelBufferError::SizeOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            bytes: vec![0; byte_count],
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Bytes per row, the chunk size for parallel row-wise rendering.
    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }
}
