//! Pixel filters module
//!
//! Every filter rewrites a [`RasterImage`](crate::image_pipeline::RasterImage)
//! in place and leaves its dimensions and channel count untouched.

pub mod blur;
pub mod grayscale;
pub mod sobel;
pub mod types;

pub use blur::row_bands;
pub use types::Filter;
