//! Fixed-cadence frame loop.
//!
//! Each iteration runs one frame's worth of CPU time, drains host input,
//! redraws the screen and presents it, then sleeps away whatever is left of
//! the frame period. A frame that overruns its period is followed
//! immediately by the next one; lost time is never made up.

use std::time::Duration;

use emu_core::{Cpu, Ticks};

use crate::config::Zx81Config;
use crate::host::{Host, HostError, HostEvent};
use crate::zx81::Zx81;

/// Wall-clock pacing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    period: Duration,
}

impl FramePacer {
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period }
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Time left to sleep after a frame that took `elapsed`.
    ///
    /// `None` when the frame used the whole period or more.
    #[must_use]
    pub fn remainder(&self, elapsed: Duration) -> Option<Duration> {
        self.period
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }
}

/// What the loop should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Drives a session against a host at a fixed frame rate.
#[derive(Debug, Clone, Copy)]
pub struct FrameScheduler {
    pacer: FramePacer,
    budget: Ticks,
}

impl FrameScheduler {
    /// Scheduler using the configuration's period and cycle budget.
    #[must_use]
    pub fn new(config: &Zx81Config) -> Self {
        Self::with_timing(config.frame_period, config.cycles_per_frame)
    }

    #[must_use]
    pub const fn with_timing(period: Duration, budget: Ticks) -> Self {
        Self {
            pacer: FramePacer::new(period),
            budget,
        }
    }

    #[must_use]
    pub const fn pacer(&self) -> FramePacer {
        self.pacer
    }

    #[must_use]
    pub const fn budget(&self) -> Ticks {
        self.budget
    }

    /// Run one frame: CPU, input, render, present, pace.
    ///
    /// A quit event does not cut the frame short; the caller stops after it.
    pub fn run_frame<C: Cpu, H: Host>(
        &self,
        zx81: &mut Zx81<C>,
        host: &mut H,
    ) -> Result<FrameOutcome, HostError> {
        let start = host.now();

        zx81.run_frame(self.budget);

        let mut outcome = FrameOutcome::Continue;
        while let Some(event) = host.poll_event() {
            match event {
                HostEvent::KeyDown(key) => zx81.key_down(key),
                HostEvent::KeyUp(key) => zx81.key_up(key),
                HostEvent::Quit => outcome = FrameOutcome::Quit,
            }
        }

        zx81.render();
        host.present(zx81.framebuffer())?;

        let elapsed = host.now().saturating_duration_since(start);
        match self.pacer.remainder(elapsed) {
            Some(left) => host.sleep(left),
            None => log::debug!(
                "frame {} overran: {:?} (period {:?})",
                zx81.frame_count(),
                elapsed,
                self.pacer.period()
            ),
        }

        Ok(outcome)
    }

    /// Run frames until the host asks to quit. Returns the frames run.
    pub fn run<C: Cpu, H: Host>(&self, zx81: &mut Zx81<C>, host: &mut H) -> Result<u64, HostError> {
        let mut frames = 0;
        loop {
            let outcome = self.run_frame(zx81, host)?;
            frames += 1;
            if outcome == FrameOutcome::Quit {
                log::info!("quit after {frames} frames");
                return Ok(frames);
            }
        }
    }
}
