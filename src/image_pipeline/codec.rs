//! Codec module
//!
//! This module hides the external image codec behind small decoder/encoder
//! traits so the pipeline can run against any implementation.

mod decoder;
mod encoder;
mod image_codec;
pub mod types;

pub use decoder::ImageDecoder;
pub use encoder::ImageEncoder;
pub use image_codec::ImageCrateCodec;
pub use types::{FilterConfig, FilterConfigBuilder, OutputFormat};
