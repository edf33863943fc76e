use std::time::{Duration, Instant};

/// Fixed-rate frame scheduler.
///
/// The runtime sleeps until [`next_deadline`](Self::next_deadline) and then
/// requests a redraw. Deadlines advance in whole intervals so the long-run rate
/// stays at `rate_hz` even when individual wakeups are late; after a stall the
/// schedule restarts from the current time instead of bursting missed frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    /// Creates a pacer for `rate_hz` frames per second, first frame due now.
    ///
    /// Non-finite or non-positive rates fall back to 60 Hz.
    pub fn new(rate_hz: f64) -> Self {
        Self::starting_at(rate_hz, Instant::now())
    }

    pub fn starting_at(rate_hz: f64, start: Instant) -> Self {
        let rate_hz = if rate_hz.is_finite() && rate_hz > 0.0 { rate_hz } else { 60.0 };
        Self {
            interval: Duration::from_secs_f64(1.0 / rate_hz),
            next: start,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Marks a frame as started at `now` and schedules the following one.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }
}
