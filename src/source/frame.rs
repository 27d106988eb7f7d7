//! Image and GIF playback onto the panel.
//!
//! Frames are decoded up front, cropped, then resized nearest-neighbour to the raster so the
//! addressing core only ever sees raster-sized images.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use image::codecs::gif::GifDecoder;
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, DynamicImage, ImageFormat, RgbImage, RgbaImage};

use crate::driver::effect_driver::DriverOpts;
use crate::encode::sink::{PreviewConfig, PreviewSink};
use crate::foundation::core::Canvas;
use crate::foundation::error::{LedWheelError, LedWheelResult};
use crate::panel::address::Panel;

/// Display time for a still image, and for GIF frames that declare no delay.
pub const STILL_FRAME_DELAY: Duration = Duration::from_millis(100);

/// One raster-sized frame and how long it stays on the panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceFrame {
    pub image: RgbImage,
    pub delay: Duration,
}

/// Anything that yields raster-sized frames. `Ok(None)` ends playback.
pub trait FrameSource {
    fn next_frame(&mut self) -> LedWheelResult<Option<SourceFrame>>;
}

/// Sub-rectangle of the source image, in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FromStr for CropRect {
    type Err = LedWheelError;

    /// Parses `x,y,w,h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LedWheelError::validation(format!("crop '{s}': {e}")))?;
        let &[x, y, width, height] = parts.as_slice() else {
            return Err(LedWheelError::validation(format!(
                "crop '{s}' must be x,y,w,h"
            )));
        };
        if width == 0 || height == 0 {
            return Err(LedWheelError::validation(format!(
                "crop '{s}' must have a non-zero size"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

/// Frames loaded from a still image or an animated GIF, replayed `loops` times (forever when
/// `None`).
#[derive(Clone, Debug)]
pub struct ImageFileSource {
    frames: Vec<SourceFrame>,
    cursor: usize,
    loops: Option<u32>,
    completed: u32,
}

impl ImageFileSource {
    /// Decode `path`. GIFs keep their per-frame delays; anything else is a single still frame.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(
        path: impl AsRef<Path>,
        canvas: Canvas,
        crop: Option<CropRect>,
    ) -> LedWheelResult<Self> {
        let path = path.as_ref();
        let raw = if ImageFormat::from_path(path).ok() == Some(ImageFormat::Gif) {
            decode_gif(path)?
        } else {
            let img = image::open(path)
                .map_err(|e| LedWheelError::frame(format!("open '{}': {e}", path.display())))?;
            vec![(img.to_rgba8(), STILL_FRAME_DELAY)]
        };
        let source = Self::from_frames(raw, canvas, crop)?;
        tracing::info!(frames = source.frame_count(), "frame source loaded");
        Ok(source)
    }

    /// Build from already decoded frames.
    pub fn from_frames(
        raw: Vec<(RgbaImage, Duration)>,
        canvas: Canvas,
        crop: Option<CropRect>,
    ) -> LedWheelResult<Self> {
        if raw.is_empty() {
            return Err(LedWheelError::frame("source has no frames"));
        }
        let frames = raw
            .into_iter()
            .map(|(img, delay)| {
                Ok(SourceFrame {
                    image: fit_to_canvas(img, canvas, crop)?,
                    delay: if delay.is_zero() {
                        STILL_FRAME_DELAY
                    } else {
                        delay
                    },
                })
            })
            .collect::<LedWheelResult<Vec<_>>>()?;
        Ok(Self {
            frames,
            cursor: 0,
            loops: Some(1),
            completed: 0,
        })
    }

    pub fn with_loops(mut self, loops: Option<u32>) -> Self {
        self.loops = loops;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for ImageFileSource {
    fn next_frame(&mut self) -> LedWheelResult<Option<SourceFrame>> {
        if self.cursor == self.frames.len() {
            self.completed += 1;
            if self.loops.is_some_and(|n| self.completed >= n) {
                return Ok(None);
            }
            self.cursor = 0;
        }
        let frame = self.frames[self.cursor].clone();
        self.cursor += 1;
        Ok(Some(frame))
    }
}

fn decode_gif(path: &Path) -> LedWheelResult<Vec<(RgbaImage, Duration)>> {
    let file = File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .map_err(|e| LedWheelError::frame(format!("decode gif '{}': {e}", path.display())))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| LedWheelError::frame(format!("decode gif '{}': {e}", path.display())))?;
    Ok(frames
        .into_iter()
        .map(|f| {
            let (num, den) = f.delay().numer_denom_ms();
            let ms = if den == 0 { 0 } else { num / den };
            (f.into_buffer(), Duration::from_millis(u64::from(ms)))
        })
        .collect())
}

fn fit_to_canvas(
    img: RgbaImage,
    canvas: Canvas,
    crop: Option<CropRect>,
) -> LedWheelResult<RgbImage> {
    let img = match crop {
        Some(c) => {
            let (w, h) = img.dimensions();
            let fits = c.x.checked_add(c.width).is_some_and(|r| r <= w)
                && c.y.checked_add(c.height).is_some_and(|b| b <= h);
            if !fits {
                return Err(LedWheelError::validation(format!(
                    "crop {}x{}+{}+{} exceeds the {w}x{h} source",
                    c.width, c.height, c.x, c.y
                )));
            }
            imageops::crop_imm(&img, c.x, c.y, c.width, c.height).to_image()
        }
        None => img,
    };
    let resized = if img.dimensions() == (canvas.width, canvas.height) {
        img
    } else {
        imageops::resize(&img, canvas.width, canvas.height, FilterType::Nearest)
    };
    Ok(DynamicImage::ImageRgba8(resized).to_rgb8())
}

/// Push every frame from `source` through [`Panel::write_frame`] and into `sink`.
///
/// Each frame stays for its own delay unless `opts.interval_override` is set. Returns the number
/// of frames presented.
#[tracing::instrument(skip_all)]
pub fn play_source(
    source: &mut dyn FrameSource,
    panel: &mut Panel,
    sink: &mut dyn PreviewSink,
    opts: DriverOpts,
) -> LedWheelResult<u64> {
    let canvas = panel.canvas();
    sink.begin(PreviewConfig {
        width: canvas.width,
        height: canvas.height,
    })?;

    let mut frame = 0u64;
    while let Some(f) = source.next_frame()? {
        panel.write_frame(&f.image)?;
        sink.present(frame, panel.buffer(), opts.preview_scale)?;
        tracing::debug!(frame, delay_ms = f.delay.as_millis() as u64, "frame pushed");
        frame += 1;

        let delay = opts.interval_override.unwrap_or(f.delay);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
    sink.end()?;

    tracing::info!(frames = frame, "playback finished");
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/source/frame.rs"]
mod tests;
