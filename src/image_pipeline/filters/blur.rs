//! Parallel 3x3 box blur.
//!
//! The row range is split into contiguous bands, one per worker. Each band
//! owns a disjoint `&mut` slice of the output and reads only an immutable
//! snapshot of the input, so the result does not depend on the worker count.

use std::ops::Range;

use tracing::{debug, info};

use crate::image_pipeline::codec::types::available_workers;
use crate::image_pipeline::common::error::{FilterError, Result};
use crate::image_pipeline::raster::types::RasterImage;

/// Splits `[0, height)` into `workers` contiguous bands.
///
/// Band `i` covers `[i * chunk, (i + 1) * chunk)` with `chunk = height / workers`;
/// the last band absorbs the remainder. Bands may be empty when
/// `height < workers`.
pub fn row_bands(height: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = height / workers;
    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { height } else { (i + 1) * chunk };
            start..end
        })
        .collect()
}

impl RasterImage {
    /// Box blur on a pool sized to the hardware parallelism.
    pub fn apply_blur_parallel(&mut self) -> Result<()> {
        self.apply_blur_with_workers(available_workers())
    }

    /// Box blur on a pool of exactly `workers` threads (at least one).
    ///
    /// Every interior sample becomes the truncated mean of its 3x3
    /// neighbourhood in the same channel. The one-pixel border is untouched.
    ///
    /// # Errors
    ///
    /// * `WorkerPool` if the OS refuses to start the worker threads
    pub fn apply_blur_with_workers(&mut self, workers: usize) -> Result<()> {
        let workers = workers.max(1);
        let (width, height, channels) = (self.width(), self.height(), self.channels());
        let row_len = self.row_len();
        info!("Blurring {}x{} image on {} worker(s)", width, height, workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("blur-{i}"))
            .build()
            .map_err(|e| FilterError::WorkerPool(e.to_string()))?;

        let original = self.pixels().to_vec();
        let bands = row_bands(height, workers);
        let pixels = self.pixels_mut();

        pool.scope(|scope| {
            let mut rest = pixels;
            for band in bands {
                let (rows, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * row_len);
                rest = tail;
                if band.is_empty() {
                    continue;
                }
                let original = &original;
                scope.spawn(move |_| {
                    blur_band(original, rows, band, width, height, channels);
                });
            }
        });

        debug!("Blur complete");
        Ok(())
    }
}

/// Blurs the rows in `band` into `out`, which holds exactly those rows.
fn blur_band(
    original: &[u8],
    out: &mut [u8],
    band: Range<usize>,
    width: usize,
    height: usize,
    channels: usize,
) {
    let first_row = band.start;
    for y in band {
        if y == 0 || y + 1 >= height {
            continue;
        }
        for x in 1..width.saturating_sub(1) {
            for c in 0..channels {
                let mut sum = 0u16;
                for ny in y - 1..=y + 1 {
                    for nx in x - 1..=x + 1 {
                        sum += original[(ny * width + nx) * channels + c] as u16;
                    }
                }
                out[((y - first_row) * width + x) * channels + c] = (sum / 9) as u8;
            }
        }
    }
}
