use image::{DynamicImage, Rgba, RgbaImage};

use crate::common::{Frame, Rect};
use crate::error::AnalyzerError;

/// Mutable copy of a frame that analyzers annotate for diagnostics.
///
/// Owns its own pixels; drawing never touches the frame it was cloned from.
pub struct DebugOverlay {
    canvas: RgbaImage,
}

impl DebugOverlay {
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            canvas: frame.image().to_rgba8(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Outlines `rect`; edges that fall outside the canvas are skipped.
    pub fn draw_rect(&mut self, rect: &Rect, color: Rgba<u8>) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let (width, height) = (self.canvas.width() as i64, self.canvas.height() as i64);
        let (left, top) = (rect.x as i64, rect.y as i64);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        for x in left.max(0)..=right.min(width - 1) {
            self.put(x, top, color);
            self.put(x, bottom, color);
        }
        for y in top.max(0)..=bottom.min(height - 1) {
            self.put(left, y, color);
            self.put(right, y, color);
        }
    }

    pub fn crop(&self, region: &Rect) -> Result<DynamicImage, AnalyzerError> {
        let (width, height) = (self.canvas.width() as i32, self.canvas.height() as i32);
        let (x, y, w, h) = region
            .to_crop_bounds(width, height)
            .ok_or(AnalyzerError::InvalidCrop(*region, width, height))?;
        Ok(DynamicImage::ImageRgba8(
            image::imageops::crop_imm(&self.canvas, x, y, w, h).to_image(),
        ))
    }

    pub fn to_image(&self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.canvas.clone())
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.canvas.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }
}
