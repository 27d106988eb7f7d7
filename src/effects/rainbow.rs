use std::time::Duration;

use crate::color::palette::hsv_to_rgb;
use crate::effects::effect::Effect;
use crate::layout::topology::RING_B_COUNT;
use crate::panel::address::Panel;

/// Rotating hue wheel on ring B.
#[derive(Clone, Debug, Default)]
pub struct Rainbow {
    offset: u32,
}

impl Rainbow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hue of ring-B position `pos` at the current offset.
    pub fn hue_at(&self, pos: u32) -> u32 {
        (self.offset + pos) * 360 / RING_B_COUNT as u32 % 360
    }
}

impl Effect for Rainbow {
    fn name(&self) -> &'static str {
        "rainbow"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(40)
    }

    fn tick(&mut self, panel: &mut Panel) {
        for i in 0..RING_B_COUNT as u32 {
            panel.write_ring_b(i as i32, hsv_to_rgb(self.hue_at(i), 90, 25));
        }
        self.offset = (self.offset + 1) % RING_B_COUNT as u32;
    }
}
