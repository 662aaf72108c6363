//! ZX81 session configuration.

use std::time::Duration;

use emu_core::{MasterClock, Ticks};

use crate::constants::{CPU_FREQUENCY, FIELD_RATE};

/// Wall-clock length of one PAL field.
pub const FRAME_PERIOD: Duration = Duration::from_millis(20);

/// Configuration for creating a ZX81 session.
#[derive(Debug, Clone)]
pub struct Zx81Config {
    /// ROM data. Must be exactly 8,192 bytes.
    pub rom: Vec<u8>,
    /// Target wall-clock time per frame.
    pub frame_period: Duration,
    /// T-states executed per frame.
    pub cycles_per_frame: Ticks,
    /// Replace the ROM's DISPLAY-5 routine with `RET`. The harness draws
    /// the screen itself, so the ROM need not spend its time generating
    /// the video signal.
    pub patch_display: bool,
}

impl Zx81Config {
    /// Standard 50 Hz timing: 20 ms frames of 65,000 T-states.
    #[must_use]
    pub fn new(rom: Vec<u8>) -> Self {
        Self {
            rom,
            frame_period: FRAME_PERIOD,
            cycles_per_frame: MasterClock::new(CPU_FREQUENCY).ticks_per_frame(FIELD_RATE),
            patch_display: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pal_field() {
        let config = Zx81Config::new(Vec::new());
        assert_eq!(config.frame_period, Duration::from_millis(20));
        assert_eq!(config.cycles_per_frame, Ticks::new(65_000));
        assert!(config.patch_display);
    }
}
