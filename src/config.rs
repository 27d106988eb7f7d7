use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::driver::effect_driver::DriverOpts;
use crate::foundation::core::Canvas;
use crate::foundation::error::{LedWheelError, LedWheelResult};

/// Largest accepted raster side.
pub const MAX_SIDE: u32 = 4096;
/// Largest accepted preview upscale.
pub const MAX_PREVIEW_SCALE: u32 = 64;

/// JSON-facing panel settings. Every field is optional in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    pub width: u32,
    pub height: u32,
    pub preview_scale: u32,
    /// Replaces the native effect and frame delays when set.
    pub frame_interval_ms: Option<u64>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            preview_scale: 4,
            frame_interval_ms: None,
        }
    }
}

impl PanelConfig {
    /// Parse from a JSON reader. The result is validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> LedWheelResult<Self> {
        let cfg: PanelConfig = serde_json::from_reader(r)
            .map_err(|e| LedWheelError::serde(format!("parse panel config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LedWheelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LedWheelError::config(format!("open panel config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> LedWheelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LedWheelError::config("panel width and height must be > 0"));
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(LedWheelError::config(format!(
                "panel {}x{} exceeds the {MAX_SIDE} px limit per side",
                self.width, self.height
            )));
        }
        if !(1..=MAX_PREVIEW_SCALE).contains(&self.preview_scale) {
            return Err(LedWheelError::config(format!(
                "preview_scale must be in 1..={MAX_PREVIEW_SCALE}, got {}",
                self.preview_scale
            )));
        }
        Ok(())
    }

    pub fn canvas(&self) -> LedWheelResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    pub fn driver_opts(&self) -> DriverOpts {
        DriverOpts {
            preview_scale: self.preview_scale,
            interval_override: self.frame_interval_ms.map(Duration::from_millis),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/panel.rs"]
mod tests;
