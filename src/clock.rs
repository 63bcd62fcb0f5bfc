//! Frame pacing for the event loop.
//!
//! Input polling can return early or late, so the animation step is the time
//! actually elapsed since the previous tick, not the configured period.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    period: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(period_ms: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_millis(period_ms as u64),
            last: now,
        }
    }

    /// How long input polling may block before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Milliseconds since the previous tick once a period has passed.
    pub fn due(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.period {
            return None;
        }
        self.last = now;
        Some(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX))
    }
}
