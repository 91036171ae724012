use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RasterImage;
use crate::image_pipeline::codec::types::FilterConfig;

pub trait ImageEncoder {
    fn encode(&self, image: &RasterImage, output: &mut dyn Write, config: &FilterConfig) -> Result<()>;
}
