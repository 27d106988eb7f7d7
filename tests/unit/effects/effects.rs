use crate::color::palette::hsv_to_rgb;
use crate::effects::breath::{BREATH_HUE_STEP, Breath};
use crate::effects::effect::Effect;
use crate::effects::rainbow::Rainbow;
use crate::effects::rings::Rings;
use crate::effects::spiral::Spiral;
use crate::effects::wipe::{WIPE_HUE_STEP, Wipe};
use crate::foundation::core::{PixelIndex, Rgb8};
use crate::panel::address::Panel;

fn panel() -> Panel {
    Panel::build(100, 100).unwrap()
}

fn run(fx: &mut dyn Effect, panel: &mut Panel, ticks: usize) {
    fx.start(panel);
    for _ in 0..ticks {
        fx.tick(panel);
    }
}

fn grey(v: u8) -> Rgb8 {
    Rgb8::new(v, v, v)
}

#[test]
fn spiral_segment_trails_the_head_on_ring_b() {
    let mut p = panel();
    let mut fx = Spiral::new();
    run(&mut fx, &mut p, 5);
    assert_eq!(fx.head(), 5);

    let ring = *p.tables().ring_b_table();
    assert_eq!(p.color_of(ring[4]), Some(grey(102)));
    assert_eq!(p.color_of(ring[0]), Some(grey(56)));
    assert_eq!(p.color_of(ring[28]), Some(grey(11)));
    assert_eq!(p.color_of(ring[27]), Some(Rgb8::BLACK));
}

#[test]
fn spiral_pulses_enter_spokes_from_the_rim() {
    let mut p = panel();
    let mut fx = Spiral::new();
    run(&mut fx, &mut p, 5);

    let spokes = *p.tables().spoke_radius_table();
    for s in 0..3 {
        assert_eq!(p.color_of(spokes[s][9]), Some(grey(22)), "spoke {s}");
        assert_eq!(p.color_of(spokes[s][8]), Some(grey(102)), "spoke {s}");
        assert_eq!(p.color_of(spokes[s][7]), Some(Rgb8::BLACK), "spoke {s}");
    }
    assert_eq!(p.color_of(spokes[3][9]), Some(Rgb8::BLACK));
}

#[test]
fn spiral_head_wraps_around_ring_b() {
    let mut p = panel();
    let mut fx = Spiral::new();
    run(&mut fx, &mut p, 32);
    assert_eq!(fx.head(), 0);
}

#[test]
fn wipe_grows_from_the_centre_and_changes_hue() {
    let mut p = panel();
    let mut fx = Wipe::new(p.canvas());
    let red = hsv_to_rgb(0, 100, 15);
    assert_eq!(fx.color(), red);

    run(&mut fx, &mut p, 11);
    assert_eq!(p.color_of(PixelIndex(1)), Some(Rgb8::BLACK));
    fx.tick(&mut p);
    assert_eq!(p.color_of(PixelIndex(1)), Some(red));

    for _ in 12..50 {
        fx.tick(&mut p);
    }
    assert_eq!(fx.radius(), 0);
    assert_eq!(fx.color(), hsv_to_rgb(WIPE_HUE_STEP, 100, 15));
}

#[test]
fn wipe_never_paints_outside_its_disk() {
    let mut p = panel();
    let mut fx = Wipe::new(p.canvas());
    run(&mut fx, &mut p, 20);
    for (slot, pt) in p.tables().coords().iter().enumerate() {
        let d2 = (pt.x as i32 - 50).pow(2) + (pt.y as i32 - 50).pow(2);
        if d2 > 19 * 19 {
            assert_eq!(p.strip_colors()[slot], Rgb8::BLACK);
        }
    }
}

#[test]
fn rings_colour_follows_radius_and_phase() {
    let mut p = panel();
    let mut fx = Rings::new(p.canvas());
    run(&mut fx, &mut p, 1);
    assert_eq!(fx.phase(), 1);
    assert_eq!(p.color_of(PixelIndex(1)), Some(Rgb8::new(255, 255, 0)));

    assert_eq!(fx.color_for(11), fx.palette()[0]);
    assert_eq!(fx.color_for(10), fx.palette()[11]);
}

#[test]
fn rings_phase_wraps_and_rotates_the_palette() {
    let mut p = panel();
    let mut fx = Rings::new(p.canvas());
    run(&mut fx, &mut p, 11);
    assert_eq!(fx.phase(), 0);
    assert_eq!(fx.palette().len(), 12);
    assert_eq!(fx.palette()[0], Rgb8::new(85, 255, 0));
}

#[test]
fn rainbow_spreads_hue_over_ring_b() {
    let mut p = panel();
    let mut fx = Rainbow::new();
    run(&mut fx, &mut p, 1);
    let ring = *p.tables().ring_b_table();
    for i in 0..32u32 {
        let want = hsv_to_rgb(i * 360 / 32, 90, 25);
        assert_eq!(p.color_of(ring[i as usize]), Some(want), "position {i}");
    }
    assert_eq!(fx.hue_at(0), 11);

    fx.tick(&mut p);
    assert_eq!(p.color_of(ring[0]), Some(hsv_to_rgb(11, 90, 25)));
    assert_eq!(p.color_of(ring[31]), Some(hsv_to_rgb(0, 90, 25)));
}

#[test]
fn rainbow_leaves_the_spokes_alone() {
    let mut p = panel();
    let mut fx = Rainbow::new();
    run(&mut fx, &mut p, 3);
    assert_eq!(p.color_of(PixelIndex(1)), Some(Rgb8::BLACK));
}

#[test]
fn breath_oscillates_and_moves_hue_when_dark() {
    let mut p = panel();
    let mut fx = Breath::new();
    run(&mut fx, &mut p, 1);
    assert!(p.strip_colors().iter().all(|&c| c == hsv_to_rgb(0, 90, 25)));

    for _ in 1..6 {
        fx.tick(&mut p);
    }
    assert_eq!(fx.val(), 31);

    for _ in 6..35 {
        fx.tick(&mut p);
    }
    assert_eq!(fx.hue(), 0);
    fx.tick(&mut p);
    assert_eq!(fx.val(), 1);
    assert_eq!(fx.hue(), BREATH_HUE_STEP);
}
