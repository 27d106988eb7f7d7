//! Coordinate transforms between the polar panel layout and the raster canvas.

pub mod polar;

pub use polar::{round_half_even, to_cartesian, to_polar};
