//! Integer colour helpers used by the effects. No colour-space correctness is attempted.

use crate::foundation::core::Rgb8;

/// `steps` colours fading linearly from `color` (index 0) towards black.
///
/// Entry `i` is `color * (steps - i) / steps` per channel; the last entry is one step above black.
pub fn gradient(color: Rgb8, steps: u32) -> Vec<Rgb8> {
    (0..steps).map(|i| color.scale(steps - i, steps)).collect()
}

/// `gradient` followed by its mirror image, for ping-pong palettes.
pub fn mirrored_gradient(color: Rgb8, steps: u32) -> Vec<Rgb8> {
    let mut out = gradient(color, steps);
    let back: Vec<Rgb8> = out.iter().rev().copied().collect();
    out.extend(back);
    out
}

/// HSV to RGB. `hue` in degrees (wrapped), `sat` and `val` in percent (clamped to 100).
pub fn hsv_to_rgb(hue: u32, sat: u32, val: u32) -> Rgb8 {
    let hue = hue % 360;
    let sat = sat.min(100);
    let val = val.min(100);

    let max = val * 255 / 100;
    let min = max * (100 - sat) / 100;
    let sector = hue / 60;
    let adj = (max - min) * (hue % 60) / 60;

    let (r, g, b) = match sector {
        0 => (max, min + adj, min),
        1 => (max - adj, max, min),
        2 => (min, max, min + adj),
        3 => (min, max - adj, max),
        4 => (min + adj, min, max),
        _ => (max, min, max - adj),
    };
    Rgb8::new(r as u8, g as u8, b as u8)
}

/// RGB to `(hue°, sat%, val%)`, the inverse of [`hsv_to_rgb`] up to integer rounding.
pub fn rgb_to_hsv(c: Rgb8) -> (u32, u32, u32) {
    let (r, g, b) = (i32::from(c.r), i32::from(c.g), i32::from(c.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let val = (max * 100 / 255) as u32;
    let delta = max - min;
    if delta == 0 {
        return (0, 0, val);
    }

    let sat = (delta * 100 / max) as u32;
    let hue = if r == max {
        (60 * (g - b) / delta + 360) % 360
    } else if g == max {
        60 * (b - r) / delta + 120
    } else {
        60 * (r - g) / delta + 240
    };
    (hue as u32, sat, val)
}

/// Rotate the hue of `c`, keeping saturation and value.
pub fn shift_hue(c: Rgb8, degrees: u32) -> Rgb8 {
    let (h, s, v) = rgb_to_hsv(c);
    hsv_to_rgb(h + degrees, s, v)
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
