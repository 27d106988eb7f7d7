use std::sync::Arc;

use image::RgbImage;

use crate::color::palette::hsv_to_rgb;
use crate::foundation::core::{Canvas, PixelIndex, RasterPoint, Rgb8};
use crate::foundation::error::{LedWheelError, LedWheelResult};
use crate::layout::builder::build_tables;
use crate::layout::tables::AddressingTables;
use crate::layout::topology::{JUNCTION_COUNT, RADIAL_SLOTS, RING_A_COUNT, RING_B_COUNT, SPOKE_COUNT};
use crate::panel::buffer::PixelColorBuffer;
use crate::render::draw::PixelTarget;

/// Addressing engine: the immutable tables plus the mutable colour state of every LED.
///
/// Writes land in two places that always agree: the per-LED strip (what firmware transmits)
/// and the raster [`PixelColorBuffer`] (what the preview shows).
#[derive(Clone, Debug)]
pub struct Panel {
    tables: Arc<AddressingTables>,
    strip: Vec<Rgb8>,
    buffer: PixelColorBuffer,
}

impl Panel {
    pub fn new(tables: Arc<AddressingTables>) -> Self {
        let strip = vec![Rgb8::BLACK; tables.total_count()];
        let buffer = PixelColorBuffer::new(tables.canvas());
        Self {
            tables,
            strip,
            buffer,
        }
    }

    /// Build tables for `width x height` and wrap them in a fresh panel.
    pub fn build(width: u32, height: u32) -> LedWheelResult<Self> {
        Ok(Self::new(Arc::new(build_tables(width, height)?)))
    }

    pub fn tables(&self) -> &AddressingTables {
        &self.tables
    }

    pub fn shared_tables(&self) -> Arc<AddressingTables> {
        Arc::clone(&self.tables)
    }

    pub fn canvas(&self) -> Canvas {
        self.tables.canvas()
    }

    pub fn buffer(&self) -> &PixelColorBuffer {
        &self.buffer
    }

    /// Current colour of one LED.
    pub fn color_of(&self, idx: PixelIndex) -> Option<Rgb8> {
        idx.slot().and_then(|s| self.strip.get(s)).copied()
    }

    /// Write by physical index. `NONE` and unknown indices are ignored.
    pub fn write_by_index(&mut self, idx: PixelIndex, color: Rgb8) {
        let Some(slot) = idx.slot() else {
            return;
        };
        let (Some(led), Some(point)) = (self.strip.get_mut(slot), self.tables.coord_of(idx)) else {
            tracing::trace!(idx = idx.0, "write to unknown pixel ignored");
            return;
        };
        *led = color;
        self.buffer.set(point, color);
    }

    /// Write the pixel at raster cell `(x, y)`, if there is one.
    pub fn write_by_raster(&mut self, x: i32, y: i32, color: Rgb8) {
        let Some(RasterPoint { x, y }) = self.canvas().point(x, y) else {
            return;
        };
        let idx = self.tables.index_at(x, y);
        self.write_by_index(idx, color);
    }

    /// Write radial slot `slot` (0 innermost) of spoke `spoke`. The spoke wraps modulo 16,
    /// negative values included; a slot outside `0..10` is a no-op.
    pub fn write_spoke(&mut self, spoke: i32, slot: i32, color: Rgb8) {
        let Some(slot) = usize::try_from(slot).ok().filter(|&s| s < RADIAL_SLOTS) else {
            return;
        };
        let spoke = wrap(spoke, SPOKE_COUNT);
        let idx = self.tables.spoke_radius_table()[spoke][slot];
        self.write_by_index(idx, color);
    }

    /// Write ring A position `pos`, wrapped modulo 8.
    pub fn write_ring_a(&mut self, pos: i32, color: Rgb8) {
        let idx = self.tables.ring_a_table()[wrap(pos, RING_A_COUNT)];
        self.write_by_index(idx, color);
    }

    /// Write ring B position `pos`, wrapped modulo 32.
    pub fn write_ring_b(&mut self, pos: i32, color: Rgb8) {
        let idx = self.tables.ring_b_table()[wrap(pos, RING_B_COUNT)];
        self.write_by_index(idx, color);
    }

    /// Write junction pixel `pos` (the one after outward spoke `2 * pos`), wrapped modulo 8.
    pub fn write_junction(&mut self, pos: i32, color: Rgb8) {
        let idx = self.tables.junction_table()[wrap(pos, JUNCTION_COUNT)];
        self.write_by_index(idx, color);
    }

    /// Set every physical pixel to `color`.
    pub fn fill(&mut self, color: Rgb8) {
        for raw in 1..=self.strip.len() {
            // total_count() <= u16::MAX, checked by the builder.
            self.write_by_index(PixelIndex(raw as u16), color);
        }
    }

    /// Set every physical pixel from HSV (`hue°`, `sat%`, `val%`).
    pub fn fill_hsv(&mut self, hue: u32, sat: u32, val: u32) {
        self.fill(hsv_to_rgb(hue, sat, val));
    }

    /// Turn every physical pixel off.
    pub fn clear(&mut self) {
        self.fill(Rgb8::BLACK);
    }

    /// Copy a raster-sized frame onto the panel: every cell holding a pixel takes that cell's
    /// colour, every other cell is ignored.
    pub fn write_frame(&mut self, frame: &RgbImage) -> LedWheelResult<()> {
        let canvas = self.canvas();
        if frame.dimensions() != (canvas.width, canvas.height) {
            return Err(LedWheelError::validation(format!(
                "frame is {}x{}, panel raster is {}x{}",
                frame.width(),
                frame.height(),
                canvas.width,
                canvas.height
            )));
        }
        let tables = Arc::clone(&self.tables);
        for x in 0..canvas.width {
            for (y, &idx) in tables.raster_column(x).iter().enumerate() {
                if !idx.is_none() {
                    self.write_by_index(idx, Rgb8::from(*frame.get_pixel(x, y as u32)));
                }
            }
        }
        Ok(())
    }

    /// LED colours in strip order (`PixelIndex - 1`).
    pub fn strip_colors(&self) -> &[Rgb8] {
        &self.strip
    }

    /// Strip colours in WS2812 wire order: G, R, B per LED.
    pub fn strip_bytes_grb(&self) -> Vec<u8> {
        self.strip.iter().flat_map(|c| [c.g, c.r, c.b]).collect()
    }
}

impl PixelTarget for Panel {
    fn write_by_raster(&mut self, x: i32, y: i32, color: Rgb8) {
        Panel::write_by_raster(self, x, y, color);
    }
}

fn wrap(v: i32, n: usize) -> usize {
    v.rem_euclid(n as i32) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/panel/address.rs"]
mod tests;
