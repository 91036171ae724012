//! Raster buffer module
//!
//! This module holds the decoded, channel-interleaved pixel buffer that every
//! filter operates on.

pub mod types;

pub use types::RasterImage;
