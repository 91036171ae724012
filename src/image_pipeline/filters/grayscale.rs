use crate::image_pipeline::raster::types::RasterImage;

impl RasterImage {
    /// Replaces the first three channels of every pixel with their truncated
    /// mean `(r + g + b) / 3`. Alpha is left alone.
    ///
    /// Gray and gray+alpha images are already gray and are returned unchanged.
    pub fn to_grayscale(&mut self) {
        let channels = self.channels();
        if channels < 3 {
            return;
        }

        for px in self.pixels_mut().chunks_exact_mut(channels) {
            let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
            let gray = (sum / 3) as u8;
            px[..3].fill(gray);
        }
    }
}
