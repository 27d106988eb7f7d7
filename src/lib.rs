//! ledwheel addresses a polar LED panel (16 spokes, two rings) through a raster canvas.
//!
//! The physical strip is a single chain of WS2812 pixels laid out in spokes and rings. This crate
//! derives the addressing tables once from the fixed geometry, then lets callers write colours
//! by raster cell, spoke slot or ring position:
//!
//! - Build [`AddressingTables`] with [`AddressingBuilder`] (or [`build_tables`])
//! - Emit the firmware lookup header with [`serialize_header`] / [`write_header`]
//! - Wrap the tables in a [`Panel`] and draw on it, directly or through an [`Effect`]
//! - Observe frames through a [`PreviewSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod effects;
pub(crate) mod encode;
pub(crate) mod layout;
pub(crate) mod panel;
pub(crate) mod render;
pub(crate) mod source;
/// Polar/cartesian coordinate transforms.
pub mod transform;

pub use crate::foundation::core::{Canvas, PixelIndex, RasterPoint, Rgb8};
pub use crate::foundation::error::{LedWheelError, LedWheelResult};

pub use crate::color::palette::{gradient, hsv_to_rgb, mirrored_gradient, rgb_to_hsv, shift_hue};
pub use crate::config::PanelConfig;
pub use crate::driver::effect_driver::{CancelToken, DriverOpts, EffectDriver, RunStats};
pub use crate::effects::breath::Breath;
pub use crate::effects::effect::{Effect, EffectKind};
pub use crate::effects::rainbow::Rainbow;
pub use crate::effects::rings::Rings;
pub use crate::effects::spiral::Spiral;
pub use crate::effects::wipe::Wipe;
pub use crate::encode::header::{HEADER_NAME, serialize_header, write_header};
pub use crate::encode::sink::{InMemorySink, PngSequenceSink, PreviewConfig, PreviewSink};
pub use crate::layout::builder::{AddressingBuilder, build_tables};
pub use crate::layout::tables::{
    AddressingTables, Collision, JunctionTable, RingATable, RingBTable, SpokeRadiusTable,
};
pub use crate::layout::topology::{
    JUNCTION_COUNT, MAX_TABLE_INDEX, PixelGroup, RADIAL_SLOTS, RING_A_COUNT, RING_B_COUNT,
    SPOKE_COUNT, SpokeDirection, TOTAL_PIXELS,
};
pub use crate::panel::address::Panel;
pub use crate::panel::buffer::PixelColorBuffer;
pub use crate::render::draw::{
    PixelTarget, draw_circle_outline, draw_filled_circle, draw_horizontal_span,
};
pub use crate::source::frame::{
    CropRect, FrameSource, ImageFileSource, STILL_FRAME_DELAY, SourceFrame, play_source,
};
