use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RasterImage;

pub trait ImageDecoder {
    fn decode(&self, data: &[u8]) -> Result<RasterImage>;
}
