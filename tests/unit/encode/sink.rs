use super::*;
use crate::foundation::core::{Canvas, RasterPoint, Rgb8};

fn buffer() -> PixelColorBuffer {
    let mut b = PixelColorBuffer::new(Canvas::new(4, 3).unwrap());
    b.set(RasterPoint::new(2, 1), Rgb8::new(200, 100, 50));
    b
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(PreviewConfig {
        width: 4,
        height: 3,
    })
    .unwrap();
    sink.present(0, &buffer(), 2).unwrap();
    sink.present(1, &buffer(), 2).unwrap();
    sink.end().unwrap();

    assert!(sink.ended());
    assert_eq!(sink.config().unwrap().width, 4);
    let numbers: Vec<u64> = sink.frames.iter().map(|(n, _, _)| *n).collect();
    assert_eq!(numbers, vec![0, 1]);
    assert_eq!(sink.frames[0].1, 2);
    assert_eq!(sink.frames[1].2.get(2, 1), Some(Rgb8::new(200, 100, 50)));
}

#[test]
fn begin_resets_previous_run() {
    let mut sink = InMemorySink::new();
    let cfg = PreviewConfig {
        width: 4,
        height: 3,
    };
    sink.begin(cfg).unwrap();
    sink.present(0, &buffer(), 1).unwrap();
    sink.begin(cfg).unwrap();
    assert!(sink.frames.is_empty());
}

#[test]
fn png_sink_writes_scaled_frames() {
    let dir = std::path::PathBuf::from("target").join("unit_png_sink");
    let _ = std::fs::remove_dir_all(&dir);
    let mut sink = PngSequenceSink::new(&dir, "spiral");
    sink.begin(PreviewConfig {
        width: 4,
        height: 3,
    })
    .unwrap();
    sink.present(7, &buffer(), 4).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 1);
    let path = dir.join("spiral_00007.png");
    assert_eq!(sink.written()[0], path);
    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (16, 12));
    assert_eq!(img.get_pixel(9, 5), &image::Rgb([200, 100, 50]));
}
