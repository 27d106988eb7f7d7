use super::*;
use crate::layout::builder::{AddressingBuilder, build_tables};

#[test]
fn header_is_wrapped_in_an_include_guard() {
    let text = serialize_header(&build_tables(100, 100).unwrap()).unwrap();
    assert!(text.starts_with("#ifndef LED_LOC_MAP_H\n#define LED_LOC_MAP_H\n\n#include <stdint.h>\n"));
    assert!(text.ends_with("#endif // LED_LOC_MAP_H\n"));
    assert!(text.contains("#define LED_WIDTH 100\n#define LED_HEIGHT 100\n#define LED_COUNT 208\n"));
}

#[test]
fn tables_appear_in_firmware_order() {
    let text = serialize_header(&build_tables(100, 100).unwrap()).unwrap();
    let loc = text.find("led_loc_map[LED_WIDTH][LED_HEIGHT]").unwrap();
    let line = text.find("led_line_map[16][10]").unwrap();
    let ring_a = text.find("led_circle1_map[8]").unwrap();
    let ring_b = text.find("led_circle2_map[32]").unwrap();
    assert!(loc < line && line < ring_a && ring_a < ring_b);
}

#[test]
fn raster_rows_are_columns_of_x() {
    let text = serialize_header(&build_tables(100, 100).unwrap()).unwrap();
    let body: Vec<&str> = text
        .lines()
        .skip_while(|l| !l.starts_with("uint8_t const led_loc_map"))
        .skip(1)
        .take_while(|l| *l != "};")
        .collect();
    assert_eq!(body.len(), 100);
    assert!(body[..99].iter().all(|l| l.ends_with("},")));
    assert!(body[99].ends_with('}'));

    // x == 61 holds pixel 1 at y == 50.
    let row: Vec<&str> = body[61]
        .trim()
        .trim_start_matches('{')
        .trim_end_matches("},")
        .split(", ")
        .collect();
    assert_eq!(row.len(), 100);
    assert_eq!(row[50], "1");
}

#[test]
fn spoke_and_ring_tables_are_listed() {
    let text = serialize_header(&build_tables(100, 100).unwrap()).unwrap();
    assert!(text.contains("uint8_t const led_line_map[16][10]={\n    {1, 2, 3, 4, 5, 6, 7, 8, 9, 10},\n    {21, 20, 19, 18, 17, 16, 15, 14, 13, 12},\n"));
    assert!(text.contains("uint8_t const led_circle1_map[8]={\n169, 170, 171, 172, 173, 174, 175, 176\n};\n\n"));
    let ring_b: Vec<String> = (177..=208).map(|v: u32| v.to_string()).collect();
    assert!(text.contains(&format!(
        "uint8_t const led_circle2_map[32]={{\n{}\n}};\n\n#endif",
        ring_b.join(", ")
    )));
}

#[test]
fn serialization_is_byte_stable() {
    let a = serialize_header(&build_tables(100, 100).unwrap()).unwrap();
    let b = serialize_header(&build_tables(100, 100).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn write_header_overwrites_previous_output() {
    let dir = std::path::PathBuf::from("target").join("unit_header");
    let path = dir.join("led_loc_map.h");
    let _ = std::fs::remove_file(&path);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, "stale").unwrap();

    let tables = AddressingBuilder::new(crate::Canvas::new(64, 64).unwrap())
        .build()
        .unwrap();
    let text = write_header(&tables, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    let again = write_header(&tables, &path).unwrap();
    assert_eq!(text, again);
}
