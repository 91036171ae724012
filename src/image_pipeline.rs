//! Image processing pipeline module
//!
//! This module provides a structured approach to filtering raster images,
//! with separate modules for the pixel buffer, the filters, the codec and the
//! load → filter → save orchestration.

pub mod codec;
pub mod common;
pub mod conversions;
pub mod filters;
pub mod raster;

pub use common::{
    FilterError,
    PipelineTimings,
    Result,
};

pub use raster::RasterImage;

pub use filters::Filter;

pub use codec::{
    FilterConfig,
    FilterConfigBuilder,
    ImageCrateCodec,
    ImageDecoder,
    ImageEncoder,
    OutputFormat,
};

pub use conversions::FilterPipeline;
