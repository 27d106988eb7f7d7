use std::str::FromStr;
use std::time::Duration;

use crate::effects::breath::Breath;
use crate::effects::rainbow::Rainbow;
use crate::effects::rings::Rings;
use crate::effects::spiral::Spiral;
use crate::effects::wipe::Wipe;
use crate::foundation::core::Canvas;
use crate::foundation::error::LedWheelError;
use crate::panel::address::Panel;

/// A procedural animation: a small state machine advanced one tick at a time.
///
/// Effects only write through the panel's addressed primitives and drawing helpers; they never
/// assume a dense raster.
pub trait Effect {
    fn name(&self) -> &'static str;

    /// Native delay between ticks.
    fn interval(&self) -> Duration;

    /// Prepare the panel before the first tick.
    fn start(&mut self, panel: &mut Panel) {
        panel.clear();
    }

    /// Write one frame's worth of changes and advance the internal phase.
    fn tick(&mut self, panel: &mut Panel);
}

/// Built-in effects, addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Spiral,
    Wipe,
    Rings,
    Rainbow,
    Breath,
}

impl EffectKind {
    /// Playlist order.
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Rainbow,
        EffectKind::Breath,
        EffectKind::Spiral,
        EffectKind::Wipe,
        EffectKind::Rings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Spiral => "spiral",
            Self::Wipe => "wipe",
            Self::Rings => "rings",
            Self::Rainbow => "rainbow",
            Self::Breath => "breath",
        }
    }

    /// Fresh effect state sized for `canvas`.
    pub fn create(self, canvas: Canvas) -> Box<dyn Effect> {
        match self {
            Self::Spiral => Box::new(Spiral::new()),
            Self::Wipe => Box::new(Wipe::new(canvas)),
            Self::Rings => Box::new(Rings::new(canvas)),
            Self::Rainbow => Box::new(Rainbow::new()),
            Self::Breath => Box::new(Breath::new()),
        }
    }
}

impl FromStr for EffectKind {
    type Err = LedWheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| LedWheelError::validation(format!("unknown effect '{s}'")))
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/effect.rs"]
mod tests;
