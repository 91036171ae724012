//! Filter selection types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;

/// One of the supported image filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Unweighted RGB average
    Grayscale,
    /// Parallel 3x3 box blur
    Blur,
    /// Sobel edge magnitude
    Sobel,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::Grayscale, Filter::Blur, Filter::Sobel];

    /// Command-line flag selecting this filter.
    pub fn flag(self) -> &'static str {
        match self {
            Filter::Grayscale => "--gray",
            Filter::Blur => "--blur",
            Filter::Sobel => "--sobel",
        }
    }

    /// Runs the filter in place. `workers` only affects the blur.
    pub fn apply(self, image: &mut RasterImage, workers: usize) -> Result<()> {
        match self {
            Filter::Grayscale => image.to_grayscale(),
            Filter::Blur => image.apply_blur_with_workers(workers)?,
            Filter::Sobel => image.apply_sobel(),
        }
        Ok(())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.flag() == s)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}
