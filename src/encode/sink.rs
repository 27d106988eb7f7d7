use std::path::{Path, PathBuf};

use crate::foundation::error::{LedWheelError, LedWheelResult};
use crate::panel::buffer::PixelColorBuffer;

/// Configuration provided to a [`PreviewSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    pub width: u32,
    pub height: u32,
}

/// Observer for panel frames, purely for humans: nothing flows back into the panel.
///
/// Ordering contract: `present` is called with strictly increasing frame numbers between
/// `begin` and `end`.
pub trait PreviewSink {
    fn begin(&mut self, cfg: PreviewConfig) -> LedWheelResult<()>;
    fn present(&mut self, frame: u64, buffer: &PixelColorBuffer, scale: u32)
    -> LedWheelResult<()>;
    fn end(&mut self) -> LedWheelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<PreviewConfig>,
    ended: bool,
    /// Frames in presentation order with the scale they were presented at.
    pub frames: Vec<(u64, u32, PixelColorBuffer)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<PreviewConfig> {
        self.cfg
    }

    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl PreviewSink for InMemorySink {
    fn begin(&mut self, cfg: PreviewConfig) -> LedWheelResult<()> {
        self.cfg = Some(cfg);
        self.ended = false;
        self.frames.clear();
        Ok(())
    }

    fn present(
        &mut self,
        frame: u64,
        buffer: &PixelColorBuffer,
        scale: u32,
    ) -> LedWheelResult<()> {
        self.frames.push((frame, scale, buffer.clone()));
        Ok(())
    }

    fn end(&mut self) -> LedWheelResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes every presented frame as `<prefix>_<frame:05>.png`, upscaled nearest-neighbour.
#[derive(Debug, Clone)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, frame: u64) -> PathBuf {
        self.dir.join(format!("{}_{frame:05}.png", self.prefix))
    }
}

impl PreviewSink for PngSequenceSink {
    fn begin(&mut self, cfg: PreviewConfig) -> LedWheelResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            LedWheelError::preview(format!("create preview dir '{}': {e}", self.dir.display()))
        })?;
        tracing::debug!(dir = %self.dir.display(), width = cfg.width, height = cfg.height, "png preview begin");
        self.written.clear();
        Ok(())
    }

    fn present(
        &mut self,
        frame: u64,
        buffer: &PixelColorBuffer,
        scale: u32,
    ) -> LedWheelResult<()> {
        let path = self.path_for(frame);
        buffer
            .scaled(scale)
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| LedWheelError::preview(format!("write png '{}': {e}", path.display())))?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> LedWheelResult<()> {
        tracing::debug!(frames = self.written.len(), "png preview end");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
