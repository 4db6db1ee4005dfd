//! Manually stepped tick clock
//!
//! Stands in for a repeating interval timer. The frame loop feeds elapsed
//! time in with `advance`, then drains due ticks with `consume`.

use crate::consts::MAX_FRAME_DT_MS;

#[derive(Debug, Clone, Default)]
pub struct TickClock {
    /// Milliseconds accumulated since the last tick (or restart)
    accumulator: f64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta. Negative deltas are ignored, long ones clamped.
    pub fn advance(&mut self, dt_ms: f64) {
        self.accumulator += dt_ms.clamp(0.0, MAX_FRAME_DT_MS);
    }

    /// Take one tick if a full interval has accumulated
    pub fn consume(&mut self, interval_ms: u32) -> bool {
        let interval = f64::from(interval_ms.max(1));
        if self.accumulator >= interval {
            self.accumulator -= interval;
            true
        } else {
            false
        }
    }

    /// Start the interval over, as when a timer is cleared and re-armed
    pub fn restart(&mut self) {
        self.accumulator = 0.0;
    }

    #[cfg(test)]
    pub(crate) fn pending_ms(&self) -> f64 {
        self.accumulator
    }
}
