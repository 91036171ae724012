//! Raster image data types

use std::path::Path;

use tracing::debug;

use crate::image_pipeline::codec::{ImageCrateCodec, ImageDecoder};
use crate::image_pipeline::common::error::{FilterError, Result};

/// Largest supported number of interleaved channels (RGBA).
pub const MAX_CHANNELS: usize = 4;

/// Decoded 8-bit image, row-major and channel-interleaved.
///
/// The sample at `(x, y, c)` lives at `(y * width + x) * channels + c`.
/// Dimensions and channel count never change after construction; filters only
/// rewrite sample values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    channels: usize,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wraps an existing sample buffer after checking it matches the stated
    /// dimensions.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` if either side is zero
    /// * `UnsupportedChannelCount` unless `channels` is in `1..=4`
    /// * `BufferSizeMismatch` if `pixels.len() != width * height * channels`
    pub fn from_raw(width: usize, height: usize, channels: usize, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions(width, height));
        }
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(FilterError::UnsupportedChannelCount(channels));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(FilterError::InvalidDimensions(width, height))?;
        if pixels.len() != expected {
            return Err(FilterError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Builds an image where every pixel carries `pixel`.
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Result<Self> {
        let pixels = pixel.repeat(width * height);
        Self::from_raw(width, height, pixel.len(), pixels)
    }

    /// Reads and decodes the file at `path`.
    ///
    /// The channel count is whatever the source provides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| FilterError::InputReadError(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded {} bytes from {}", bytes.len(), path.display());
        ImageCrateCodec.decode(&bytes)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per row.
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    /// Buffer index of sample `(x, y, c)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.width + x) * self.channels + c
    }

    #[inline]
    pub fn sample(&self, x: usize, y: usize, c: usize) -> u8 {
        self.pixels[self.index(x, y, c)]
    }

    /// Whether `(x, y)` lies on the outermost row or column.
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }
}
