use std::time::Duration;

use crate::color::palette::hsv_to_rgb;
use crate::effects::effect::Effect;
use crate::foundation::core::{Canvas, Rgb8};
use crate::panel::address::Panel;
use crate::render::draw::draw_filled_circle;

/// Hue advance between consecutive wipes.
pub const WIPE_HUE_STEP: u32 = 67;

/// A filled disk grows from the canvas centre to half the height, then restarts in a new hue
/// over the previous one.
#[derive(Clone, Debug)]
pub struct Wipe {
    center: (i32, i32),
    max_radius: i32,
    radius: i32,
    hue: u32,
    color: Rgb8,
}

impl Wipe {
    pub fn new(canvas: Canvas) -> Self {
        let hue = 0;
        Self {
            center: canvas.center(),
            max_radius: (canvas.height / 2) as i32,
            radius: 0,
            hue,
            color: hsv_to_rgb(hue, 100, 15),
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }
}

impl Effect for Wipe {
    fn name(&self) -> &'static str {
        "wipe"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(15)
    }

    fn tick(&mut self, panel: &mut Panel) {
        let (cx, cy) = self.center;
        draw_filled_circle(panel, cx, cy, self.radius, self.color);

        self.radius += 1;
        if self.radius >= self.max_radius {
            self.radius = 0;
            self.hue = (self.hue + WIPE_HUE_STEP) % 360;
            self.color = hsv_to_rgb(self.hue, 100, 15);
        }
    }
}
