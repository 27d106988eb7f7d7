//! C header emission for the firmware lookup tables.
//!
//! The output is byte-stable for identical tables: firmware builds diff and cache it, so any
//! formatting change here is a wire change.

use std::fmt::Write as _;
use std::path::Path;

use crate::foundation::core::PixelIndex;
use crate::foundation::error::{LedWheelError, LedWheelResult};
use crate::layout::tables::AddressingTables;

/// Base name of the emitted artifact; also drives the include guard.
pub const HEADER_NAME: &str = "led_loc_map";

/// Render the raster map, spoke table and both ring tables as a C header.
#[tracing::instrument(skip_all, fields(total = tables.total_count()))]
pub fn serialize_header(tables: &AddressingTables) -> LedWheelResult<String> {
    let guard = format!("{}_H", HEADER_NAME.to_uppercase());
    let canvas = tables.canvas();
    let mut out = String::new();

    writeln!(out, "#ifndef {guard}").map_err(fmt_err)?;
    writeln!(out, "#define {guard}\n").map_err(fmt_err)?;
    writeln!(out, "#include <stdint.h>").map_err(fmt_err)?;
    writeln!(out, "#define LED_WIDTH {}", canvas.width).map_err(fmt_err)?;
    writeln!(out, "#define LED_HEIGHT {}", canvas.height).map_err(fmt_err)?;
    writeln!(out, "#define LED_COUNT {}", tables.total_count()).map_err(fmt_err)?;

    let columns: Vec<&[PixelIndex]> = (0..canvas.width).map(|x| tables.raster_column(x)).collect();
    write_table_2d(&mut out, "led_loc_map[LED_WIDTH][LED_HEIGHT]", &columns)?;

    let spokes = tables.spoke_radius_table();
    let rows: Vec<&[PixelIndex]> = spokes.iter().map(|row| row.as_slice()).collect();
    let decl = format!("led_line_map[{}][{}]", spokes.len(), spokes[0].len());
    write_table_2d(&mut out, &decl, &rows)?;

    let ring_a = tables.ring_a_table();
    write_table_1d(&mut out, &format!("led_circle1_map[{}]", ring_a.len()), ring_a)?;
    let ring_b = tables.ring_b_table();
    write_table_1d(&mut out, &format!("led_circle2_map[{}]", ring_b.len()), ring_b)?;

    writeln!(out, "#endif // {guard}").map_err(fmt_err)?;
    Ok(out)
}

/// Serialize and write the header, replacing any previous file.
pub fn write_header(tables: &AddressingTables, path: &Path) -> LedWheelResult<String> {
    let text = serialize_header(tables)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedWheelError::Other(anyhow::anyhow!(
                "create header dir '{}': {e}",
                parent.display()
            ))
        })?;
    }
    std::fs::write(path, &text).map_err(|e| {
        LedWheelError::Other(anyhow::anyhow!("write header '{}': {e}", path.display()))
    })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote lookup header");
    Ok(text)
}

fn write_table_2d(out: &mut String, decl: &str, rows: &[&[PixelIndex]]) -> LedWheelResult<()> {
    writeln!(out, "uint8_t const {decl}={{").map_err(fmt_err)?;
    for (i, row) in rows.iter().enumerate() {
        let sep = if i + 1 == rows.len() { "" } else { "," };
        writeln!(out, "    {{{}}}{sep}", join_u8(row)?).map_err(fmt_err)?;
    }
    writeln!(out, "}};\n").map_err(fmt_err)?;
    Ok(())
}

fn write_table_1d(out: &mut String, decl: &str, values: &[PixelIndex]) -> LedWheelResult<()> {
    writeln!(out, "uint8_t const {decl}={{").map_err(fmt_err)?;
    writeln!(out, "{}", join_u8(values)?).map_err(fmt_err)?;
    writeln!(out, "}};\n").map_err(fmt_err)?;
    Ok(())
}

fn join_u8(values: &[PixelIndex]) -> LedWheelResult<String> {
    let mut s = String::with_capacity(values.len() * 4);
    for (i, idx) in values.iter().enumerate() {
        let v = u8::try_from(idx.0).map_err(|_| {
            LedWheelError::config(format!("pixel index {idx} does not fit an 8-bit table"))
        })?;
        if i > 0 {
            s.push_str(", ");
        }
        write!(s, "{v}").map_err(fmt_err)?;
    }
    Ok(s)
}

fn fmt_err(e: std::fmt::Error) -> LedWheelError {
    LedWheelError::serde(format!("format header: {e}"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/header.rs"]
mod tests;
