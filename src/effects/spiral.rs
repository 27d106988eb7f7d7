use std::time::Duration;

use crate::color::palette::{gradient, hsv_to_rgb};
use crate::effects::effect::Effect;
use crate::foundation::core::Rgb8;
use crate::layout::topology::{RING_B_COUNT, SPOKE_COUNT};
use crate::panel::address::Panel;

const TAIL: usize = 9;
/// Pulses are born two slots beyond the rim so their tail enters the spoke first.
const PULSE_BIRTH_BIT: u32 = 11;
const PULSE_BITS: i32 = 12;
/// Pulse travel per even tick, in half slots; a pulse moves once the accumulator passes 2.
const PULSE_STEP_HALVES: u8 = 1;

/// Rotating fading segment on ring B; every other tick seeds an inward pulse on the spoke under
/// the segment head.
#[derive(Clone, Debug)]
pub struct Spiral {
    palette: Vec<Rgb8>,
    head: i32,
    pulse_pos: [u8; SPOKE_COUNT],
    pulse_bits: [u16; SPOKE_COUNT],
}

impl Spiral {
    pub fn new() -> Self {
        Self {
            palette: gradient(hsv_to_rgb(0, 0, 40), TAIL as u32),
            head: 0,
            pulse_pos: [0; SPOKE_COUNT],
            pulse_bits: [0; SPOKE_COUNT],
        }
    }

    pub fn head(&self) -> i32 {
        self.head
    }

    fn advance_pulses(&mut self, panel: &mut Panel) {
        let spoke = (self.head / 2) as usize % SPOKE_COUNT;
        self.pulse_bits[spoke] |= 1 << PULSE_BIRTH_BIT;

        for i in 0..SPOKE_COUNT {
            self.pulse_pos[i] += PULSE_STEP_HALVES;
            if self.pulse_pos[i] <= 2 {
                continue;
            }
            self.pulse_pos[i] -= 2;
            self.pulse_bits[i] >>= 1;
            for b in 0..PULSE_BITS {
                if self.pulse_bits[i] & (1 << b) != 0 {
                    let s = i as i32;
                    panel.write_spoke(s, b, Rgb8::BLACK);
                    panel.write_spoke(s, b - 1, self.palette[7]);
                    panel.write_spoke(s, b - 2, self.palette[0]);
                }
            }
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Spiral {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(60)
    }

    fn tick(&mut self, panel: &mut Panel) {
        panel.write_ring_b(self.head - TAIL as i32, Rgb8::BLACK);
        for (i, &c) in self.palette.iter().enumerate() {
            panel.write_ring_b(self.head - i as i32, c);
        }

        if self.head % 2 == 0 {
            self.advance_pulses(panel);
        }

        self.head = (self.head + 1) % RING_B_COUNT as i32;
    }
}
