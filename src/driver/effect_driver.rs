use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::effects::effect::{Effect, EffectKind};
use crate::encode::sink::{PreviewConfig, PreviewSink};
use crate::foundation::error::{LedWheelError, LedWheelResult};
use crate::panel::address::Panel;

/// Shared stop flag, checked by the driver once per tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options controlling how effects are paced and previewed.
#[derive(Clone, Copy, Debug)]
pub struct DriverOpts {
    /// Nearest-neighbour upscale handed to the preview sink.
    pub preview_scale: u32,
    /// Replaces every effect's native interval when set. `Some(Duration::ZERO)` runs flat out.
    pub interval_override: Option<Duration>,
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self {
            preview_scale: 4,
            interval_override: None,
        }
    }
}

/// Run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Ticks executed (and frames presented).
    pub ticks: u64,
    /// Whether the run ended because the cancel token fired.
    pub cancelled: bool,
}

/// Cooperative, single-threaded effect loop: tick, present, sleep, check for cancellation.
///
/// Frames are presented with strictly increasing numbers starting at 0 for each `run` or
/// `run_playlist` call.
#[derive(Debug)]
pub struct EffectDriver {
    opts: DriverOpts,
    cancel: CancelToken,
}

impl EffectDriver {
    pub fn new(opts: DriverOpts) -> LedWheelResult<Self> {
        if opts.preview_scale == 0 {
            return Err(LedWheelError::validation("preview scale must be >= 1"));
        }
        Ok(Self {
            opts,
            cancel: CancelToken::new(),
        })
    }

    pub fn opts(&self) -> DriverOpts {
        self.opts
    }

    /// Token that stops this driver when cancelled from anywhere.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Drive one effect until `limit` ticks have run or the token is cancelled.
    #[tracing::instrument(skip_all, fields(effect = effect.name(), limit = ?limit))]
    pub fn run(
        &mut self,
        effect: &mut dyn Effect,
        panel: &mut Panel,
        sink: &mut dyn PreviewSink,
        limit: Option<u64>,
    ) -> LedWheelResult<RunStats> {
        sink.begin(self.preview_config(panel))?;
        let mut frame = 0u64;
        effect.start(panel);
        let cancelled = self.drive(effect, panel, sink, limit, &mut frame)?;
        sink.end()?;

        tracing::info!(ticks = frame, cancelled, "effect run finished");
        Ok(RunStats {
            ticks: frame,
            cancelled,
        })
    }

    /// Cycle through `playlist`, `dwell_ticks` ticks per effect, for `rounds` full passes
    /// (forever when `None`, until cancelled).
    ///
    /// Every visit starts from fresh effect state on a cleared panel.
    #[tracing::instrument(skip_all, fields(effects = playlist.len(), dwell = dwell_ticks, rounds = ?rounds))]
    pub fn run_playlist(
        &mut self,
        playlist: &[EffectKind],
        panel: &mut Panel,
        sink: &mut dyn PreviewSink,
        dwell_ticks: u64,
        rounds: Option<u64>,
    ) -> LedWheelResult<RunStats> {
        if playlist.is_empty() {
            return Err(LedWheelError::validation("playlist must not be empty"));
        }
        if dwell_ticks == 0 {
            return Err(LedWheelError::validation("dwell ticks must be >= 1"));
        }

        sink.begin(self.preview_config(panel))?;
        let mut frame = 0u64;
        let mut cancelled = false;
        let mut round = 0u64;
        'rounds: while rounds.is_none_or(|n| round < n) {
            for &kind in playlist {
                let mut effect = kind.create(panel.canvas());
                tracing::debug!(effect = %kind, round, "playlist switch");
                effect.start(panel);
                if self.drive(effect.as_mut(), panel, sink, Some(dwell_ticks), &mut frame)? {
                    cancelled = true;
                    break 'rounds;
                }
            }
            round += 1;
        }
        sink.end()?;

        tracing::info!(ticks = frame, rounds = round, cancelled, "playlist finished");
        Ok(RunStats {
            ticks: frame,
            cancelled,
        })
    }

    fn preview_config(&self, panel: &Panel) -> PreviewConfig {
        let canvas = panel.canvas();
        PreviewConfig {
            width: canvas.width,
            height: canvas.height,
        }
    }

    /// Returns `true` when stopped by cancellation.
    fn drive(
        &self,
        effect: &mut dyn Effect,
        panel: &mut Panel,
        sink: &mut dyn PreviewSink,
        limit: Option<u64>,
        frame: &mut u64,
    ) -> LedWheelResult<bool> {
        let interval = self.opts.interval_override.unwrap_or(effect.interval());
        let mut ticks = 0u64;
        while limit.is_none_or(|n| ticks < n) {
            if self.cancel.is_cancelled() {
                return Ok(true);
            }
            effect.tick(panel);
            sink.present(*frame, panel.buffer(), self.opts.preview_scale)?;
            tracing::debug!(effect = effect.name(), frame = *frame, "tick");
            *frame += 1;
            ticks += 1;
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/effect_driver.rs"]
mod tests;
