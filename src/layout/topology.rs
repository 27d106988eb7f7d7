//! Fixed panel geometry. These are design constants of the physical board, not configuration.

/// Angular rays carrying radial pixels.
pub const SPOKE_COUNT: usize = 16;
/// Pixels per spoke, slot 0 innermost.
pub const RADIAL_SLOTS: usize = 10;
/// Pixels on the inner standalone ring.
pub const RING_A_COUNT: usize = 8;
/// Pixels on the outer standalone ring.
pub const RING_B_COUNT: usize = 32;

/// Canvas width that maps to a scale factor of 1.0.
pub const REFERENCE_WIDTH: f64 = 160.0;
/// Radius of slot 0 at scale 1.0.
pub const INNER_RADIUS: f64 = 18.0;
/// Radial distance between neighbouring slots at scale 1.0.
pub const RADIAL_PITCH: f64 = 4.5;
/// Ring B radius at scale 1.0.
pub const RING_B_RADIUS: f64 = 75.0;

/// One junction pixel follows every outward spoke (even spokes).
pub const JUNCTION_COUNT: usize = SPOKE_COUNT / 2;

/// Total physical pixels on the board, in strip order: spokes with their junctions, ring A, ring B.
pub const TOTAL_PIXELS: usize =
    SPOKE_COUNT * RADIAL_SLOTS + JUNCTION_COUNT + RING_A_COUNT + RING_B_COUNT;

/// Largest index the 8-bit firmware tables can hold.
pub const MAX_TABLE_INDEX: usize = u8::MAX as usize;

/// Wiring direction of a spoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpokeDirection {
    /// Strip runs from the centre outwards; a junction pixel follows the last slot.
    Outward,
    /// Strip runs from the rim back towards the centre.
    Inward,
}

impl SpokeDirection {
    /// Spoke 0 runs outward, then directions alternate.
    pub fn for_spoke(spoke: usize) -> Self {
        if spoke % 2 == 0 {
            Self::Outward
        } else {
            Self::Inward
        }
    }

    /// Radial slot of the `step`-th pixel generated along a spoke.
    pub fn slot_for_step(self, step: usize) -> usize {
        match self {
            Self::Outward => step,
            Self::Inward => RADIAL_SLOTS - 1 - step,
        }
    }
}

/// Scale factor for a canvas width.
pub fn scale_for_width(width: u32) -> f64 {
    f64::from(width) / REFERENCE_WIDTH
}

/// Radius of radial slot `slot` at scale 1.0.
pub fn slot_radius(slot: usize) -> f64 {
    INNER_RADIUS + slot as f64 * RADIAL_PITCH
}

/// Ring A sits on the outermost spoke radius.
pub fn ring_a_radius() -> f64 {
    slot_radius(RADIAL_SLOTS - 1)
}

/// Semantic group a physical pixel belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelGroup {
    /// Radial pixel on a spoke.
    Spoke { spoke: usize, slot: usize },
    /// Extra pixel between an outward spoke and the next one; not reachable semantically.
    Junction { after_spoke: usize },
    /// Inner standalone ring.
    RingA { position: usize },
    /// Outer standalone ring.
    RingB { position: usize },
}
