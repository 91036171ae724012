use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::codec::{FilterConfig, ImageDecoder, ImageEncoder, OutputFormat};
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::conversions::FilterPipeline;
use crate::image_pipeline::filters::Filter;
use crate::image_pipeline::raster::RasterImage;

struct MockDecoder {
    should_fail: bool,
    mock_image: Option<RasterImage>,
}

impl ImageDecoder for MockDecoder {
    fn decode(&self, _data: &[u8]) -> Result<RasterImage> {
        if self.should_fail {
            return Err(FilterError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self
            .mock_image
            .clone()
            .unwrap_or_else(|| RasterImage::filled(10, 10, &[40, 80, 120]).unwrap()))
    }
}

struct MockEncoder {
    should_fail: bool,
    written: Arc<Mutex<Vec<RasterImage>>>,
}

impl ImageEncoder for MockEncoder {
    fn encode(&self, image: &RasterImage, output: &mut dyn Write, _config: &FilterConfig) -> Result<()> {
        if self.should_fail {
            return Err(FilterError::EncodeError("Mock encode error".to_string()));
        }
        output.write_all(b"encoded")?;
        self.written.lock().unwrap().push(image.clone());
        Ok(())
    }
}

fn pipeline(
    decoder_fails: bool,
    encoder_fails: bool,
    mock_image: Option<RasterImage>,
    config: FilterConfig,
) -> (FilterPipeline<MockDecoder, MockEncoder>, Arc<Mutex<Vec<RasterImage>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let decoder = MockDecoder {
        should_fail: decoder_fails,
        mock_image,
    };
    let encoder = MockEncoder {
        should_fail: encoder_fails,
        written: written.clone(),
    };
    (FilterPipeline::with_custom(decoder, encoder, config), written)
}

#[test]
fn test_successful_grayscale() {
    let (pipeline, written) = pipeline(false, false, None, FilterConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", Filter::Grayscale, &mut output);

    assert!(result.is_ok());
    assert_eq!(output.into_inner(), b"encoded");
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].pixels().iter().all(|&v| v == 80));
}

#[test]
fn test_decoder_failure() {
    let (pipeline, written) = pipeline(true, false, None, FilterConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", Filter::Blur, &mut output);

    assert!(matches!(result.unwrap_err(), FilterError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_encoder_failure() {
    let (pipeline, _) = pipeline(false, true, None, FilterConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", Filter::Sobel, &mut output);

    assert!(matches!(result.unwrap_err(), FilterError::EncodeError(_)));
}

#[test]
fn test_dimension_validation_failure() {
    let image = RasterImage::filled(300, 20, &[0]).unwrap();
    let config = FilterConfig::builder().max_dimension(Some(256)).build();
    let (pipeline, written) = pipeline(false, false, Some(image), config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", Filter::Grayscale, &mut output);

    assert!(matches!(result.unwrap_err(), FilterError::InvalidDimensions(300, 20)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_dimension_validation_disabled() {
    let image = RasterImage::filled(300, 20, &[0]).unwrap();
    let config = FilterConfig::builder()
        .validate_dimensions(false)
        .max_dimension(Some(256))
        .build();
    let (pipeline, _) = pipeline(false, false, Some(image), config);

    let mut output = Cursor::new(Vec::new());
    assert!(pipeline.convert(b"fake image data", Filter::Grayscale, &mut output).is_ok());
}

#[test]
fn test_timings_cover_every_step() {
    let (pipeline, _) = pipeline(false, false, None, FilterConfig::default());

    let mut output = Cursor::new(Vec::new());
    let timings = pipeline
        .convert_with_timings(b"fake image data", Filter::Blur, &mut output)
        .unwrap();

    let names: Vec<_> = timings.steps().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["decode", "validate_dimensions", "filter", "encode"]);
}

#[test]
fn test_configured_workers_do_not_change_blur() {
    let pixels = (0..12 * 9 * 3).map(|i| (i * 31 % 256) as u8).collect();
    let image = RasterImage::from_raw(12, 9, 3, pixels).unwrap();

    let mut results = Vec::new();
    for threads in [Some(1), Some(5), None] {
        let config = FilterConfig::builder().threads(threads).build();
        let (pipeline, written) = pipeline(false, false, Some(image.clone()), config);
        let mut output = Cursor::new(Vec::new());
        pipeline.convert(b"fake image data", Filter::Blur, &mut output).unwrap();
        results.push(written.lock().unwrap().pop().unwrap());
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], results[2]);
}

#[test]
fn test_convert_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.png");

    let source = RasterImage::filled(3, 3, &[90, 90, 90]).unwrap();
    let png_config = FilterConfig::builder().output_format(OutputFormat::Png).build();
    let mut bytes = Vec::new();
    crate::image_pipeline::codec::ImageCrateCodec
        .encode(&source, &mut bytes, &png_config)
        .unwrap();
    std::fs::write(&input, bytes).unwrap();

    let pipeline = FilterPipeline::new(png_config);
    let timings = pipeline
        .convert_file_with_timings(&input, &output, Filter::Blur)
        .unwrap();

    assert!(timings.get_step("read_input_file").is_some());
    assert!(timings.get_step("write_output_file").is_some());
    assert_eq!(RasterImage::load(&output).unwrap(), source);
}

#[test]
fn test_convert_file_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.jpg");

    let pipeline = FilterPipeline::new(FilterConfig::default());
    let result = pipeline.convert_file(dir.path().join("missing.jpg"), &output, Filter::Sobel);

    assert!(matches!(result.unwrap_err(), FilterError::InputReadError(_)));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_undecodable_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.jpg");
    let output = dir.path().join("output.jpg");
    std::fs::write(&input, b"not an image at all").unwrap();

    let pipeline = FilterPipeline::new(FilterConfig::default());
    let result = pipeline.convert_file(&input, &output, Filter::Grayscale);

    assert!(matches!(result.unwrap_err(), FilterError::DecodeError(_)));
    assert!(!output.exists());
}

#[test]
fn test_set_config() {
    let (mut pipeline, _) = pipeline(false, false, None, FilterConfig::default());
    pipeline.set_config(FilterConfig::builder().threads(Some(2)).build());

    assert_eq!(pipeline.config().threads, Some(2));
}
