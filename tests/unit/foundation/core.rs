use super::*;

#[test]
fn pixel_index_slot_is_zero_based() {
    assert!(PixelIndex::NONE.is_none());
    assert_eq!(PixelIndex::NONE.slot(), None);
    assert_eq!(PixelIndex(1).slot(), Some(0));
    assert_eq!(PixelIndex(208).slot(), Some(207));
}

#[test]
fn canvas_rejects_empty_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(100, 80).unwrap().cell_count(), 8000);
}

#[test]
fn canvas_point_filters_off_canvas_coordinates() {
    let c = Canvas::new(10, 5).unwrap();
    assert_eq!(c.point(0, 0), Some(RasterPoint::new(0, 0)));
    assert_eq!(c.point(9, 4), Some(RasterPoint::new(9, 4)));
    assert_eq!(c.point(10, 0), None);
    assert_eq!(c.point(0, 5), None);
    assert_eq!(c.point(-1, 2), None);
}

#[test]
fn rgb_scale_truncates_and_clamps() {
    let c = Rgb8::new(255, 100, 9);
    assert_eq!(c.scale(1, 1), c);
    assert_eq!(c.scale(0, 9), Rgb8::BLACK);
    assert_eq!(c.scale(1, 2), Rgb8::new(127, 50, 4));
    assert_eq!(c.scale(3, 2), c);
    assert_eq!(c.scale(1, 0), Rgb8::BLACK);
}

#[test]
fn rgb_image_conversion_keeps_channel_order() {
    let c = Rgb8::new(1, 2, 3);
    assert_eq!(c.to_image(), image::Rgb([1, 2, 3]));
    assert_eq!(Rgb8::from(image::Rgb([1, 2, 3])), c);
}
