//! Filter pipeline configuration types

use std::num::NonZeroUsize;

/// Highest JPEG quality setting, used for every CLI run.
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Container the filtered image is written as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Baseline JPEG. Alpha channels are dropped.
    Jpeg { quality: u8 },
    /// Lossless PNG, keeps every channel
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Configuration for a filter run
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Encoder used for the output, independent of the output path's extension
    pub output_format: OutputFormat,
    /// Worker count for the parallel blur. `None` uses the hardware parallelism.
    pub threads: Option<usize>,
    /// Whether to validate image dimensions before filtering
    pub validate_dimensions: bool,
    /// Largest accepted width or height, when validating
    pub max_dimension: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            threads: None,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Number of blur workers this config resolves to, never zero.
    pub fn worker_count(&self) -> usize {
        match self.threads {
            Some(n) if n > 0 => n,
            _ => available_workers(),
        }
    }
}

/// Detected hardware parallelism, falling back to 1 when unknown.
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Builder for FilterConfig
#[derive(Default)]
pub struct FilterConfigBuilder {
    output_format: Option<OutputFormat>,
    threads: Option<Option<usize>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl FilterConfigBuilder {
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// JPEG output at `quality`, clamped to 1..=100.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.output_format = Some(OutputFormat::Jpeg {
            quality: quality.clamp(1, 100),
        });
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> FilterConfig {
        let default = FilterConfig::default();
        FilterConfig {
            output_format: self.output_format.unwrap_or(default.output_format),
            threads: self.threads.unwrap_or(default.threads),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
