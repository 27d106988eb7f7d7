//! Raster drawing expressed only through [`PixelTarget::write_by_raster`].
//!
//! Nothing here knows the substrate is sparse: cells without a physical pixel are dropped by the
//! target. Circles are rasterized on the inside of the ideal circle, so every cell touched
//! satisfies `dx² + dy² <= r²`.

use crate::foundation::core::Rgb8;

/// Anything that accepts colour writes addressed by raster cell.
pub trait PixelTarget {
    /// Write `color` at `(x, y)`. Off-canvas and empty cells must be ignored.
    fn write_by_raster(&mut self, x: i32, y: i32, color: Rgb8);
}

/// Walks one quadrant of a circle of radius `r`, yielding `(dx, dy)` for `dy = 0..=r` where
/// `dx` is the largest offset with `dx² + dy² <= r²`.
///
/// Integer-only: `err` tracks `r² - dx² - dy²` and is updated incrementally as `dy` grows and
/// `dx` shrinks, in the manner of the midpoint circle algorithm.
#[derive(Clone, Debug)]
struct QuadrantWalk {
    dx: i64,
    dy: i64,
    r: i64,
    err: i64,
}

impl QuadrantWalk {
    fn new(r: i32) -> Self {
        let r = i64::from(r);
        Self {
            dx: r,
            dy: 0,
            r,
            err: 0,
        }
    }
}

impl Iterator for QuadrantWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.r < 0 || self.dy > self.r {
            return None;
        }
        while self.err < 0 {
            // dx² -> (dx - 1)²
            self.err += 2 * self.dx - 1;
            self.dx -= 1;
        }
        let out = (self.dx as i32, self.dy as i32);
        // dy² -> (dy + 1)²
        self.err -= 2 * self.dy + 1;
        self.dy += 1;
        Some(out)
    }
}

/// Write `length` consecutive cells starting at `(x, y)` going right.
pub fn draw_horizontal_span<T: PixelTarget + ?Sized>(
    target: &mut T,
    x: i32,
    y: i32,
    length: i32,
    color: Rgb8,
) {
    for i in 0..length.max(0) {
        target.write_by_raster(x.saturating_add(i), y, color);
    }
}

/// Circle outline around `(cx, cy)` using 8-way symmetry over one octant.
pub fn draw_circle_outline<T: PixelTarget + ?Sized>(
    target: &mut T,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Rgb8,
) {
    for (dx, dy) in QuadrantWalk::new(radius).take_while(|&(dx, dy)| dy <= dx) {
        for (ox, oy) in [(dx, dy), (dy, dx)] {
            target.write_by_raster(cx + ox, cy + oy, color);
            target.write_by_raster(cx - ox, cy + oy, color);
            target.write_by_raster(cx + ox, cy - oy, color);
            target.write_by_raster(cx - ox, cy - oy, color);
        }
    }
}

/// Filled disk around `(cx, cy)`: one span per row, the centre row painted once.
pub fn draw_filled_circle<T: PixelTarget + ?Sized>(
    target: &mut T,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Rgb8,
) {
    for (dx, dy) in QuadrantWalk::new(radius) {
        draw_horizontal_span(target, cx - dx, cy + dy, 2 * dx + 1, color);
        if dy != 0 {
            draw_horizontal_span(target, cx - dx, cy - dy, 2 * dx + 1, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
