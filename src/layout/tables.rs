use crate::foundation::core::{Canvas, PixelIndex, RasterPoint};
use crate::layout::topology::{
    JUNCTION_COUNT, PixelGroup, RADIAL_SLOTS, RING_A_COUNT, RING_B_COUNT, SPOKE_COUNT,
};

/// Spoke index x radial slot -> pixel.
pub type SpokeRadiusTable = [[PixelIndex; RADIAL_SLOTS]; SPOKE_COUNT];
/// Ring A position -> pixel.
pub type RingATable = [PixelIndex; RING_A_COUNT];
/// Ring B position -> pixel.
pub type RingBTable = [PixelIndex; RING_B_COUNT];
/// Junction after outward spoke `2 * i` -> pixel.
pub type JunctionTable = [PixelIndex; JUNCTION_COUNT];

/// Two placements that rounded to the same raster cell; the later one owns the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
    pub point: RasterPoint,
    pub previous: PixelIndex,
    pub winner: PixelIndex,
}

/// Immutable addressing tables for one canvas size.
///
/// Built once by [`crate::AddressingBuilder`]; every view here shares the same global index space.
#[derive(Clone, Debug)]
pub struct AddressingTables {
    pub(crate) canvas: Canvas,
    pub(crate) scale: f64,
    /// Column-major `[x][y]` storage, `x * height + y`.
    pub(crate) raster: Vec<PixelIndex>,
    pub(crate) coords: Vec<RasterPoint>,
    pub(crate) groups: Vec<PixelGroup>,
    pub(crate) spokes: SpokeRadiusTable,
    pub(crate) ring_a: RingATable,
    pub(crate) ring_b: RingBTable,
    pub(crate) junctions: JunctionTable,
    pub(crate) collisions: Vec<Collision>,
}

impl AddressingTables {
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Linear scale factor applied to the reference radii (`width / 160`).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of physical pixels placed.
    pub fn total_count(&self) -> usize {
        self.coords.len()
    }

    /// `RasterToIndexMap[x][y]`; `PixelIndex::NONE` for empty or off-canvas cells.
    pub fn index_at(&self, x: u32, y: u32) -> PixelIndex {
        if x >= self.canvas.width || y >= self.canvas.height {
            return PixelIndex::NONE;
        }
        self.raster[(x as usize) * (self.canvas.height as usize) + (y as usize)]
    }

    /// Column `x` of the raster map (all `y` for one `x`), as emitted in the header.
    pub fn raster_column(&self, x: u32) -> &[PixelIndex] {
        let h = self.canvas.height as usize;
        let start = (x as usize) * h;
        self.raster.get(start..start + h).unwrap_or(&[])
    }

    /// `IndexToCoordTable[idx - 1]`.
    pub fn coord_of(&self, idx: PixelIndex) -> Option<RasterPoint> {
        idx.slot().and_then(|s| self.coords.get(s)).copied()
    }

    /// Raster cell of every pixel, in strip order.
    pub fn coords(&self) -> &[RasterPoint] {
        &self.coords
    }

    /// Semantic group of a pixel.
    pub fn group_of(&self, idx: PixelIndex) -> Option<PixelGroup> {
        idx.slot().and_then(|s| self.groups.get(s)).copied()
    }

    pub fn spoke_radius_table(&self) -> &SpokeRadiusTable {
        &self.spokes
    }

    pub fn ring_a_table(&self) -> &RingATable {
        &self.ring_a
    }

    pub fn ring_b_table(&self) -> &RingBTable {
        &self.ring_b
    }

    pub fn junction_table(&self) -> &JunctionTable {
        &self.junctions
    }

    /// Raster cells claimed by more than one placement, in generation order.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Number of distinct pixels reachable through the raster map.
    pub fn addressable_by_raster(&self) -> usize {
        self.raster.iter().filter(|idx| !idx.is_none()).count()
    }

    /// Every index reachable through the spoke/ring tables, in table order.
    pub fn semantic_indices(&self) -> impl Iterator<Item = PixelIndex> + '_ {
        self.spokes
            .iter()
            .flatten()
            .chain(self.ring_a.iter())
            .chain(self.ring_b.iter())
            .copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tables.rs"]
mod tests;
