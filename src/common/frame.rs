use std::path::Path;
use std::sync::Arc;

use image::DynamicImage;
use uuid::Uuid;

use crate::common::rect::Rect;
use crate::error::AnalyzerError;

/// Read-only handle to one captured image. Cloning shares the pixel buffer.
#[derive(Clone)]
pub struct Frame {
    image: Arc<DynamicImage>,
    frame_id: Uuid,
}

impl Frame {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image: Arc::new(image),
            frame_id: Uuid::new_v4(),
        }
    }

    pub fn empty() -> Self {
        Self::new(DynamicImage::new_rgb8(0, 0))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        Ok(Self::new(image::open(path)?))
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    pub fn bounds(&self) -> Rect {
        Rect::full(self.width(), self.height())
    }

    pub fn crop(&self, region: &Rect) -> Result<DynamicImage, AnalyzerError> {
        let (x, y, width, height) = region
            .to_crop_bounds(self.width(), self.height())
            .ok_or(AnalyzerError::InvalidCrop(
                *region,
                self.width(),
                self.height(),
            ))?;
        Ok(self.image.crop_imm(x, y, width, height))
    }

    pub fn shares_buffer_with(&self, other: &Frame) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl From<DynamicImage> for Frame {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("frame_id", &self.frame_id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageBuffer, Rgb};

    fn solid(width: u32, height: u32) -> Frame {
        Frame::new(DynamicImage::ImageRgb8(
            ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(width, height, Rgb([1, 2, 3])),
        ))
    }

    #[test]
    fn cloning_frame_shares_image_buffer() {
        let f1 = solid(16, 16);
        let f2 = f1.clone();
        assert!(f1.shares_buffer_with(&f2));
        assert_eq!(f1.frame_id(), f2.frame_id());
    }

    #[test]
    fn empty_frame_has_no_area() {
        let frame = Frame::empty();
        assert!(frame.is_empty());
        assert_eq!(frame.bounds(), Rect::full(0, 0));
        assert!(!solid(1, 1).is_empty());
    }

    #[test]
    fn crop_returns_requested_region() {
        let frame = solid(20, 10);
        let crop = frame.crop(&Rect::new(5, 2, 10, 6)).unwrap();
        assert_eq!(crop.dimensions(), (10, 6));
    }

    #[test]
    fn crop_outside_frame_is_an_error() {
        let frame = solid(20, 10);
        let err = frame.crop(&Rect::new(15, 0, 10, 5)).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidCrop(_, 20, 10)));
    }
}
