use tracing::info;

use crate::image_pipeline::raster::types::RasterImage;

impl RasterImage {
    /// Sobel edge magnitude.
    ///
    /// Converts to gray first, then writes `round(sqrt(gx² + gy²))`, clamped to
    /// 255, into every channel of each interior pixel. Gradients read channel 0
    /// of the gray snapshot. Border pixels keep their gray value.
    pub fn apply_sobel(&mut self) {
        info!("Running Sobel on {}x{} image", self.width(), self.height());
        self.to_grayscale();

        let original = self.clone();
        let (width, height, channels) = (self.width(), self.height(), self.channels());
        let p = |x: usize, y: usize| original.sample(x, y, 0) as i32;

        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                let gx = -p(x - 1, y - 1) + p(x + 1, y - 1)
                    - 2 * p(x - 1, y) + 2 * p(x + 1, y)
                    - p(x - 1, y + 1) + p(x + 1, y + 1);
                let gy = -p(x - 1, y - 1) - 2 * p(x, y - 1) - p(x + 1, y - 1)
                    + p(x - 1, y + 1) + 2 * p(x, y + 1) + p(x + 1, y + 1);

                let magnitude = ((gx * gx + gy * gy) as f64).sqrt().round().min(255.0) as u8;
                let start = original.index(x, y, 0);
                self.pixels_mut()[start..start + channels].fill(magnitude);
            }
        }
    }
}
