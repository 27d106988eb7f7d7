use super::*;
use crate::render::draw::draw_filled_circle;

const C: Rgb8 = Rgb8::new(12, 34, 56);

fn panel() -> Panel {
    Panel::build(100, 100).unwrap()
}

fn read_back(p: &Panel, idx: PixelIndex) -> Option<Rgb8> {
    p.buffer().at(p.tables().coord_of(idx)?)
}

#[test]
fn spoke_writes_round_trip_through_the_buffer() {
    let mut p = panel();
    for s in 0..16 {
        for r in 0..10 {
            p.write_spoke(s, r, C);
            let idx = p.tables().spoke_radius_table()[s as usize][r as usize];
            assert_eq!(read_back(&p, idx), Some(C));
            assert_eq!(p.color_of(idx), Some(C));
        }
    }
}

#[test]
fn spoke_index_wraps_and_slot_is_checked() {
    let mut p = panel();
    p.write_spoke(-1, 3, C);
    let idx = p.tables().spoke_radius_table()[15][3];
    assert_eq!(p.color_of(idx), Some(C));

    p.write_spoke(17, 0, Rgb8::WHITE);
    let idx = p.tables().spoke_radius_table()[1][0];
    assert_eq!(p.color_of(idx), Some(Rgb8::WHITE));

    let before = p.clone();
    p.write_spoke(0, 10, C);
    p.write_spoke(0, -1, C);
    assert_eq!(p.buffer(), before.buffer());
    assert_eq!(p.strip_colors(), before.strip_colors());
}

#[test]
fn ring_writes_wrap() {
    for idx in -16..16 {
        let mut a = panel();
        let mut b = panel();
        a.write_ring_a(idx, C);
        b.write_ring_a(idx + 8, C);
        assert_eq!(a.strip_colors(), b.strip_colors());

        let mut a = panel();
        let mut b = panel();
        a.write_ring_b(idx, C);
        b.write_ring_b(idx + 32, C);
        assert_eq!(a.strip_colors(), b.strip_colors());
    }

    let mut p = panel();
    p.write_ring_b(-1, C);
    assert_eq!(p.color_of(PixelIndex(208)), Some(C));
    p.write_ring_a(-9, C);
    assert_eq!(p.color_of(PixelIndex(176)), Some(C));
}

#[test]
fn junction_writes_reach_unmapped_pixels() {
    let mut p = panel();
    p.write_junction(0, C);
    assert_eq!(p.color_of(PixelIndex(11)), Some(C));
    assert_eq!(p.buffer().get(86, 57), Some(C));
}

#[test]
fn empty_cells_are_ignored() {
    let mut p = panel();
    let before = p.clone();
    p.write_by_raster(50, 50, C);
    p.write_by_raster(-1, 0, C);
    p.write_by_raster(0, 100, C);
    p.write_by_index(PixelIndex::NONE, C);
    p.write_by_index(PixelIndex(209), C);
    assert_eq!(p.buffer(), before.buffer());
    assert_eq!(p.strip_colors(), before.strip_colors());
}

#[test]
fn raster_write_resolves_to_index() {
    let mut p = panel();
    p.write_by_raster(61, 50, C);
    assert_eq!(p.color_of(PixelIndex(1)), Some(C));
    assert_eq!(p.buffer().get(61, 50), Some(C));
}

#[test]
fn fill_and_clear_touch_every_pixel() {
    let mut p = panel();
    p.fill(C);
    assert!(p.strip_colors().iter().all(|&c| c == C));
    for &pt in p.tables().coords() {
        assert_eq!(p.buffer().at(pt), Some(C));
    }
    assert_eq!(p.buffer().get(50, 50), Some(Rgb8::BLACK));
    p.clear();
    assert!(p.strip_colors().iter().all(|&c| c == Rgb8::BLACK));

    p.fill_hsv(120, 100, 100);
    assert_eq!(p.color_of(PixelIndex(1)), Some(Rgb8::new(0, 255, 0)));
}

#[test]
fn grb_bytes_follow_strip_order() {
    let mut p = panel();
    p.write_by_index(PixelIndex(2), Rgb8::new(1, 2, 3));
    let bytes = p.strip_bytes_grb();
    assert_eq!(bytes.len(), 208 * 3);
    assert_eq!(&bytes[3..6], &[2, 1, 3]);
    assert_eq!(&bytes[0..3], &[0, 0, 0]);
}

#[test]
fn frame_mapping_samples_pixel_cells() {
    let mut p = panel();
    let frame = RgbImage::from_fn(100, 100, |x, y| image::Rgb([x as u8, y as u8, 7]));
    p.write_frame(&frame).unwrap();
    for (slot, pt) in p.tables().coords().iter().enumerate() {
        assert_eq!(
            p.strip_colors()[slot],
            Rgb8::new(pt.x as u8, pt.y as u8, 7)
        );
    }
    assert_eq!(p.buffer().get(50, 50), Some(Rgb8::BLACK));
}

#[test]
fn frame_of_wrong_size_is_rejected() {
    let mut p = panel();
    let err = p.write_frame(&RgbImage::new(10, 10)).unwrap_err();
    assert!(matches!(err, LedWheelError::Validation(_)));
}

#[test]
fn filled_circle_only_touches_pixels_inside_the_disk() {
    let mut p = panel();
    let (cx, cy, r) = (55, 47, 14);
    draw_filled_circle(&mut p, cx, cy, r, C);
    for x in 0..100u32 {
        for y in 0..100u32 {
            let inside = (x as i32 - cx).pow(2) + (y as i32 - cy).pow(2) <= r * r;
            let has_pixel = !p.tables().index_at(x, y).is_none();
            let got = p.buffer().get(x, y).unwrap();
            if inside && has_pixel {
                assert_eq!(got, C, "({x},{y})");
            } else {
                assert_eq!(got, Rgb8::BLACK, "({x},{y})");
            }
        }
    }
}
