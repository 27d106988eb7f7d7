use std::time::Duration;

use crate::effects::effect::Effect;
use crate::panel::address::Panel;

const VAL_START: i32 = 25;
const VAL_MIN: i32 = 1;
const VAL_MAX: i32 = 30;
/// Hue advance applied each time the brightness bottoms out.
pub const BREATH_HUE_STEP: u32 = 137;

/// Whole-panel brightness oscillation; the hue moves on whenever the panel is near dark.
#[derive(Clone, Debug)]
pub struct Breath {
    hue: u32,
    val: i32,
    dir: i32,
}

impl Breath {
    pub fn new() -> Self {
        Self {
            hue: 0,
            val: VAL_START,
            dir: 1,
        }
    }

    pub fn hue(&self) -> u32 {
        self.hue
    }

    pub fn val(&self) -> i32 {
        self.val
    }
}

impl Default for Breath {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Breath {
    fn name(&self) -> &'static str {
        "breath"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(30)
    }

    fn tick(&mut self, panel: &mut Panel) {
        panel.fill_hsv(self.hue, 90, self.val.clamp(0, 100) as u32);

        self.val += self.dir;
        if self.val > VAL_MAX || self.val <= VAL_MIN {
            self.dir = -self.dir;
            if self.val <= 3 {
                self.hue = (self.hue + BREATH_HUE_STEP) % 360;
            }
        }
    }
}
