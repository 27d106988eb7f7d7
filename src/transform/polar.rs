//! Polar <-> raster conversion around the canvas centre.
//!
//! Angles are radians, measured from +x towards +y (raster y grows downwards, so positive
//! angles turn clockwise on screen). Raster placement rounds half-to-even; changing the
//! rounding mode moves pixels that sit exactly between two cells and breaks the wiring contract
//! of the generated lookup table.

use kurbo::Vec2;

/// Convert a raster position to `(radius, angle)` relative to the canvas centre.
///
/// The angle is `atan2(dy, dx)`, in `(-π, π]`.
#[inline]
pub fn to_polar(x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
    let v = Vec2::new(x - f64::from(width) / 2.0, y - f64::from(height) / 2.0);
    (v.hypot(), v.atan2())
}

/// Convert `(radius, angle)` around the canvas centre to the nearest raster cell.
///
/// The result may fall outside the canvas; callers decide whether that is an error.
#[inline]
pub fn to_cartesian(r: f64, theta: f64, width: u32, height: u32) -> (i64, i64) {
    let v = Vec2::from_angle(theta) * r;
    let x = v.x + f64::from(width) / 2.0;
    let y = v.y + f64::from(height) / 2.0;
    (round_half_even(x), round_half_even(y))
}

/// Round to the nearest integer, ties to the even neighbour (`72.5 -> 72`, `27.5 -> 28`).
#[inline]
pub fn round_half_even(v: f64) -> i64 {
    v.round_ties_even() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/transform/polar.rs"]
mod tests;
