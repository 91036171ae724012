//! Codec implementation backed by the `image` crate.
//!
//! Decoding guesses the container from the leading bytes and keeps the source
//! channel layout. Samples deeper than 8 bits are narrowed to 8 bits.

use std::borrow::Cow;
use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder as _};
use tracing::debug;

use crate::image_pipeline::codec::decoder::ImageDecoder;
use crate::image_pipeline::codec::encoder::ImageEncoder;
use crate::image_pipeline::codec::types::{FilterConfig, OutputFormat};
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;

pub struct ImageCrateCodec;

impl ImageDecoder for ImageCrateCodec {
    fn decode(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded =
            image::load_from_memory(data).map_err(|e| FilterError::DecodeError(e.to_string()))?;
        let (width, height) = (decoded.width() as usize, decoded.height() as usize);
        let channels = decoded.color().channel_count() as usize;

        debug!(
            "Decoded image: {}x{}, {} channel(s), source type {:?}",
            width,
            height,
            channels,
            decoded.color()
        );

        let pixels = narrow_to_u8(decoded, channels);
        RasterImage::from_raw(width, height, channels, pixels)
    }
}

impl ImageEncoder for ImageCrateCodec {
    fn encode(&self, image: &RasterImage, output: &mut dyn Write, config: &FilterConfig) -> Result<()> {
        debug!(
            "Encoding {}x{} image as {:?}",
            image.width(),
            image.height(),
            config.output_format
        );

        let width = dimension(image.width())?;
        let height = dimension(image.height())?;
        let mut buffer = Vec::new();

        match config.output_format {
            OutputFormat::Jpeg { quality } => {
                let (samples, color) = opaque_samples(image);
                JpegEncoder::new_with_quality(&mut buffer, quality)
                    .encode(&samples, width, height, color)
                    .map_err(|e| FilterError::EncodeError(e.to_string()))?;
            }
            OutputFormat::Png => {
                PngEncoder::new(&mut buffer)
                    .write_image(image.pixels(), width, height, color_type(image.channels()))
                    .map_err(|e| FilterError::EncodeError(e.to_string()))?;
            }
        }

        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

fn narrow_to_u8(decoded: DynamicImage, channels: usize) -> Vec<u8> {
    match decoded {
        DynamicImage::ImageLuma8(buf) => buf.into_raw(),
        DynamicImage::ImageLumaA8(buf) => buf.into_raw(),
        DynamicImage::ImageRgb8(buf) => buf.into_raw(),
        DynamicImage::ImageRgba8(buf) => buf.into_raw(),
        other => match channels {
            1 => other.into_luma8().into_raw(),
            2 => other.into_luma_alpha8().into_raw(),
            3 => other.into_rgb8().into_raw(),
            _ => other.into_rgba8().into_raw(),
        },
    }
}

fn dimension(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| FilterError::EncodeError(format!("dimension {value} does not fit the encoder")))
}

fn color_type(channels: usize) -> ExtendedColorType {
    match channels {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        _ => ExtendedColorType::Rgba8,
    }
}

/// Samples without an alpha channel, since JPEG cannot store one.
fn opaque_samples(image: &RasterImage) -> (Cow<'_, [u8]>, ExtendedColorType) {
    match image.channels() {
        2 => (
            Cow::Owned(image.pixels().chunks_exact(2).map(|px| px[0]).collect()),
            ExtendedColorType::L8,
        ),
        4 => (
            Cow::Owned(
                image
                    .pixels()
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect(),
            ),
            ExtendedColorType::Rgb8,
        ),
        n => (Cow::Borrowed(image.pixels()), color_type(n)),
    }
}
