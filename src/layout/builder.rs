use std::f64::consts::PI;

use crate::foundation::core::{Canvas, PixelIndex, RasterPoint};
use crate::foundation::error::{LedWheelError, LedWheelResult};
use crate::layout::tables::{AddressingTables, Collision};
use crate::layout::topology::{
    JUNCTION_COUNT, MAX_TABLE_INDEX, PixelGroup, RADIAL_SLOTS, RING_A_COUNT, RING_B_COUNT,
    RING_B_RADIUS, SPOKE_COUNT, SpokeDirection, TOTAL_PIXELS, ring_a_radius, scale_for_width,
    slot_radius,
};
use crate::transform::polar::to_cartesian;

/// Walks the fixed topology once and assigns every physical pixel its index.
///
/// Index order is the strip wiring order and must not change: spokes 0..16 (outward spokes
/// followed by their junction pixel), then ring A, then ring B.
#[derive(Debug)]
pub struct AddressingBuilder {
    canvas: Canvas,
    scale: f64,
    max_index: usize,
    next: usize,
    raster: Vec<PixelIndex>,
    coords: Vec<RasterPoint>,
    groups: Vec<PixelGroup>,
    spokes: [[PixelIndex; RADIAL_SLOTS]; SPOKE_COUNT],
    ring_a: [PixelIndex; RING_A_COUNT],
    ring_b: [PixelIndex; RING_B_COUNT],
    junctions: [PixelIndex; JUNCTION_COUNT],
    collisions: Vec<Collision>,
}

impl AddressingBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            scale: scale_for_width(canvas.width),
            max_index: MAX_TABLE_INDEX,
            next: 1,
            raster: vec![PixelIndex::NONE; canvas.cell_count()],
            coords: Vec::with_capacity(TOTAL_PIXELS),
            groups: Vec::with_capacity(TOTAL_PIXELS),
            spokes: [[PixelIndex::NONE; RADIAL_SLOTS]; SPOKE_COUNT],
            ring_a: [PixelIndex::NONE; RING_A_COUNT],
            ring_b: [PixelIndex::NONE; RING_B_COUNT],
            junctions: [PixelIndex::NONE; JUNCTION_COUNT],
            collisions: Vec::new(),
        }
    }

    /// Lower the largest index the target table format accepts (default 255).
    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    /// Generate all placements and freeze the tables.
    #[tracing::instrument(skip_all, fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn build(mut self) -> LedWheelResult<AddressingTables> {
        let spoke_radius = |slot: usize| self.scale * slot_radius(slot);
        let radii: [f64; RADIAL_SLOTS] = std::array::from_fn(spoke_radius);

        for spoke in 0..SPOKE_COUNT {
            let dir = SpokeDirection::for_spoke(spoke);
            let theta = 2.0 * PI * spoke as f64 / SPOKE_COUNT as f64;
            let mut last_radius = radii[0];
            for step in 0..RADIAL_SLOTS {
                let slot = dir.slot_for_step(step);
                last_radius = radii[slot];
                let idx = self.place(last_radius, theta, PixelGroup::Spoke { spoke, slot })?;
                self.spokes[spoke][slot] = idx;
            }

            if dir == SpokeDirection::Outward {
                let theta = 2.0 * PI * (spoke as f64 / SPOKE_COUNT as f64 + 1.0 / 32.0);
                let idx = self.place(
                    last_radius,
                    theta,
                    PixelGroup::Junction { after_spoke: spoke },
                )?;
                self.junctions[spoke / 2] = idx;
            }
        }

        let r = self.scale * ring_a_radius();
        for position in 0..RING_A_COUNT {
            let theta = 2.0 * PI * (position as f64 / RING_A_COUNT as f64 + 3.0 / 32.0);
            self.ring_a[position] = self.place(r, theta, PixelGroup::RingA { position })?;
        }

        let r = self.scale * RING_B_RADIUS;
        for position in 0..RING_B_COUNT {
            let theta = 2.0 * PI * (position as f64 / RING_B_COUNT as f64 - 1.0 / 32.0);
            self.ring_b[position] = self.place(r, theta, PixelGroup::RingB { position })?;
        }

        tracing::info!(
            total = self.coords.len(),
            collisions = self.collisions.len(),
            "addressing tables built"
        );

        Ok(AddressingTables {
            canvas: self.canvas,
            scale: self.scale,
            raster: self.raster,
            coords: self.coords,
            groups: self.groups,
            spokes: self.spokes,
            ring_a: self.ring_a,
            ring_b: self.ring_b,
            junctions: self.junctions,
            collisions: self.collisions,
        })
    }

    fn place(&mut self, r: f64, theta: f64, group: PixelGroup) -> LedWheelResult<PixelIndex> {
        if self.next > self.max_index {
            return Err(LedWheelError::config(format!(
                "pixel {} ({group:?}) exceeds the table index range 1..={}",
                self.next, self.max_index
            )));
        }
        let idx = PixelIndex(u16::try_from(self.next).map_err(|_| {
            LedWheelError::config(format!("pixel index {} does not fit in u16", self.next))
        })?);

        let (x, y) = to_cartesian(r, theta, self.canvas.width, self.canvas.height);
        let point = i32::try_from(x)
            .ok()
            .zip(i32::try_from(y).ok())
            .and_then(|(x, y)| self.canvas.point(x, y))
            .ok_or_else(|| {
                LedWheelError::config(format!(
                    "pixel {idx} ({group:?}) lands at ({x}, {y}), outside the {}x{} canvas",
                    self.canvas.width, self.canvas.height
                ))
            })?;

        let cell = (point.x as usize) * (self.canvas.height as usize) + (point.y as usize);
        let previous = self.raster[cell];
        if !previous.is_none() {
            tracing::warn!(
                x = point.x,
                y = point.y,
                previous = previous.0,
                winner = idx.0,
                "raster collision, later placement wins"
            );
            self.collisions.push(Collision {
                point,
                previous,
                winner: idx,
            });
        }
        self.raster[cell] = idx;
        self.coords.push(point);
        self.groups.push(group);
        self.next += 1;
        Ok(idx)
    }
}

/// Build the addressing tables for a `width x height` canvas.
pub fn build_tables(width: u32, height: u32) -> LedWheelResult<AddressingTables> {
    AddressingBuilder::new(Canvas::new(width, height)?).build()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/builder.rs"]
mod tests;
