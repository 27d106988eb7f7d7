use crate::foundation::error::{LedWheelError, LedWheelResult};

/// 1-based identifier of one physical LED. `PixelIndex::NONE` (0) marks a raster cell without
/// a physical pixel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct PixelIndex(pub u16);

impl PixelIndex {
    /// "No physical pixel here".
    pub const NONE: Self = Self(0);

    /// True for the reserved empty marker.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Zero-based position in strip order (`index - 1`), or `None` for the empty marker.
    pub fn slot(self) -> Option<usize> {
        usize::from(self.0).checked_sub(1)
    }
}

impl std::fmt::Display for PixelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer raster cell on the panel canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RasterPoint {
    pub x: u32,
    pub y: u32,
}

impl RasterPoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Raster dimensions the addressing tables are generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> LedWheelResult<Self> {
        if width == 0 || height == 0 {
            return Err(LedWheelError::config(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn cell_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Resolve signed drawing coordinates to a cell, rejecting anything off-canvas.
    pub fn point(self, x: i32, y: i32) -> Option<RasterPoint> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some(RasterPoint { x, y })
    }

    pub fn center(self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// 8-bit RGB color. Channel order on the wire is decided by the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GREEN: Self = Self::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `num / den` with integer truncation. `den == 0` yields black.
    pub fn scale(self, num: u32, den: u32) -> Self {
        if den == 0 {
            return Self::BLACK;
        }
        let ch = |c: u8| ((u32::from(c) * num.min(den)) / den) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    pub fn to_image(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
