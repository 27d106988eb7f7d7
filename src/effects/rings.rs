use std::time::Duration;

use crate::color::palette::{mirrored_gradient, shift_hue};
use crate::effects::effect::Effect;
use crate::foundation::core::{Canvas, Rgb8};
use crate::panel::address::Panel;
use crate::render::draw::draw_circle_outline;

const BASE: Rgb8 = Rgb8::new(255, 255, 0);
const FADE_STEPS: u32 = 6;
/// The phase counter wraps one short of the palette length.
const PHASE_WRAP: usize = 11;
/// Hue rotation applied to the palette each time the phase wraps.
pub const RINGS_HUE_STEP: u32 = 40;

/// Concentric outlines from `h/12` out to `h/2 - 10`, coloured from a ping-pong palette whose
/// phase advances every tick.
#[derive(Clone, Debug)]
pub struct Rings {
    center: (i32, i32),
    radii: std::ops::Range<i32>,
    base: Rgb8,
    palette: Vec<Rgb8>,
    phase: usize,
}

impl Rings {
    pub fn new(canvas: Canvas) -> Self {
        let h = canvas.height as i32;
        Self {
            center: canvas.center(),
            radii: h / 12..h / 2 - 10,
            base: BASE,
            palette: mirrored_gradient(BASE, FADE_STEPS),
            phase: 0,
        }
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn palette(&self) -> &[Rgb8] {
        &self.palette
    }

    /// Colour used for the ring of radius `r` at the current phase.
    pub fn color_for(&self, r: i32) -> Rgb8 {
        let n = self.palette.len();
        self.palette[(self.phase + r.rem_euclid(n as i32) as usize) % n]
    }
}

impl Effect for Rings {
    fn name(&self) -> &'static str {
        "rings"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(200)
    }

    fn tick(&mut self, panel: &mut Panel) {
        let (cx, cy) = self.center;
        for r in self.radii.clone() {
            draw_circle_outline(panel, cx, cy, r, self.color_for(r));
        }

        self.phase += 1;
        if self.phase >= PHASE_WRAP {
            self.phase = 0;
            self.base = shift_hue(self.base, RINGS_HUE_STEP);
            self.palette = mirrored_gradient(self.base, FADE_STEPS);
        }
    }
}
