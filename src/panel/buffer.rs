use image::RgbImage;

use crate::foundation::core::{Canvas, RasterPoint, Rgb8};

/// Raster-shaped colour buffer holding the current colour of every physical pixel at its cell.
///
/// Cells without a physical pixel are never written by the addressing engine; their contents
/// carry no meaning (they stay black unless a caller pokes them directly).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelColorBuffer {
    image: RgbImage,
}

impl PixelColorBuffer {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            image: RgbImage::new(canvas.width, canvas.height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.image.get_pixel_checked(x, y).map(|px| Rgb8::from(*px))
    }

    pub fn at(&self, p: RasterPoint) -> Option<Rgb8> {
        self.get(p.x, p.y)
    }

    pub(crate) fn set(&mut self, p: RasterPoint, color: Rgb8) {
        if let Some(px) = self.image.get_pixel_mut_checked(p.x, p.y) {
            *px = color.to_image();
        }
    }

    /// Borrow the raw image (row-major RGB8).
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Copy out the raw image.
    pub fn to_image(&self) -> RgbImage {
        self.image.clone()
    }

    /// Nearest-neighbour upscale by an integer factor, for human preview.
    pub fn scaled(&self, scale: u32) -> RgbImage {
        let scale = scale.max(1);
        if scale == 1 {
            return self.image.clone();
        }
        image::imageops::resize(
            &self.image,
            self.image.width() * scale,
            self.image.height() * scale,
            image::imageops::FilterType::Nearest,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/buffer.rs"]
mod tests;
