use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    codec::{FilterConfig, ImageCrateCodec, ImageDecoder, ImageEncoder},
    common::error::{FilterError, Result},
    common::timing::PipelineTimings,
    filters::Filter,
    raster::RasterImage,
};

/// Decode → filter → encode, over any codec.
pub struct FilterPipeline<D: ImageDecoder, E: ImageEncoder> {
    decoder: D,
    encoder: E,
    config: FilterConfig,
}

impl FilterPipeline<ImageCrateCodec, ImageCrateCodec> {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            decoder: ImageCrateCodec,
            encoder: ImageCrateCodec,
            config,
        }
    }
}

impl<D: ImageDecoder, E: ImageEncoder> FilterPipeline<D, E> {
    pub fn with_custom(decoder: D, encoder: E, config: FilterConfig) -> Self {
        Self {
            decoder,
            encoder,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(FilterError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Runs `filter` on `image` with the configured worker count.
    pub fn apply(&self, image: &mut RasterImage, filter: Filter) -> Result<()> {
        filter.apply(image, self.config.worker_count())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], filter: Filter, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, filter, output)?;
        Ok(())
    }

    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        filter: Filter,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting {} filter", filter);

        let mut image = timings.record("decode", || {
            let _span = tracing::info_span!("decode").entered();
            self.decoder.decode(input_data)
        })?;

        timings.record("validate_dimensions", || {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())
        })?;

        timings.record("filter", || {
            let _span = tracing::info_span!("filter", filter = %filter).entered();
            self.apply(&mut image, filter)
        })?;

        timings.record("encode", || {
            let _span = tracing::info_span!("encode").entered();
            self.encoder.encode(&image, output, &self.config)
        })?;

        info!(
            width = image.width(),
            height = image.height(),
            channels = image.channels(),
            "Filter complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Filters the file at `input_path` into `output_path`.
    ///
    /// The output file is only created once the image has been filtered and
    /// encoded, so a failed run never leaves a partial file behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        filter: Filter,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path, filter)?;
        Ok(())
    }

    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        filter: Filter,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Filtering file"
        );

        let input_data = timings.record("read_input_file", || {
            std::fs::read(input_path).map_err(|e| {
                FilterError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let mut encoded = Vec::new();
        let conversion_timings = self.convert_with_timings(&input_data, filter, &mut encoded)?;
        for step in conversion_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        timings.record("write_output_file", || {
            std::fs::write(output_path, &encoded).map_err(|e| {
                FilterError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })
        })?;

        Ok(timings)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FilterConfig) {
        self.config = config;
    }
}
