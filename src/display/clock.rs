use std::time::{Duration, Instant};

use crate::display::FrameClock;

/// Fixed-rate frame clock backed by `thread::sleep`.
///
/// Deadlines advance by one period per frame; after an overrun the next
/// deadline restarts from now instead of bursting to catch up.
pub struct IntervalClock {
    period: Duration,
    next: Instant,
}

impl IntervalClock {
    pub fn new(frame_rate: u32) -> Self {
        let period = Duration::from_secs(1) / frame_rate.max(1);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameClock for IntervalClock {
    fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            tracing::trace!(late_by = ?(now - self.next), "frame overran");
            self.next = now + self.period;
        }
    }
}
