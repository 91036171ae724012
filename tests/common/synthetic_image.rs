use std::path::Path;

use imgfilter_rs::image_pipeline::{
    FilterConfig, ImageCrateCodec, ImageEncoder, OutputFormat, RasterImage,
};

/// Every pixel set to `value` in all three RGB channels.
pub fn solid_rgb(width: usize, height: usize, value: u8) -> RasterImage {
    RasterImage::filled(width, height, &[value; 3]).unwrap()
}

/// Left half black, right half white.
pub fn split_black_white(width: usize, height: usize) -> RasterImage {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for _y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { 0 } else { 255 };
            pixels.extend([v, v, v]);
        }
    }
    RasterImage::from_raw(width, height, 3, pixels).unwrap()
}

/// Writes `image` losslessly so the test controls every input sample.
pub fn write_png(image: &RasterImage, path: &Path) {
    let config = FilterConfig::builder().output_format(OutputFormat::Png).build();
    let mut bytes = Vec::new();
    ImageCrateCodec.encode(image, &mut bytes, &config).unwrap();
    std::fs::write(path, bytes).unwrap();
}
