//! Master clock configuration.

use crate::Ticks;

/// Master clock configuration for a system.
///
/// Frame budgets are expressed in ticks of this clock.
#[derive(Debug, Clone, Copy)]
pub struct MasterClock {
    /// Crystal frequency in Hz (e.g., `3_250_000` for the ZX81 CPU clock).
    pub frequency_hz: u64,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }

    /// Ticks per frame at the given frame rate (integer division).
    #[must_use]
    pub const fn ticks_per_frame(&self, frames_per_second: u64) -> Ticks {
        Ticks::new(self.frequency_hz / frames_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pal_field_budget() {
        let clock = MasterClock::new(3_250_000);
        assert_eq!(clock.ticks_per_frame(50), Ticks::new(65_000));
    }

    #[test]
    fn budget_rounds_down() {
        let clock = MasterClock::new(1_000);
        assert_eq!(clock.ticks_per_frame(3), Ticks::new(333));
    }
}
