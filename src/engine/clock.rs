//! Fixed-timestep clock.
//!
//! A "do not exceed" governor: each `wait` sleeps whatever is left of the
//! tick period. An iteration that overruns is not compensated later.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FixedClock {
    period: Duration,
    last: Instant,
    ticks: u64,
}

impl FixedClock {
    pub fn new(rate_hz: u32) -> Self {
        let rate = rate_hz.max(1);
        Self {
            period: Duration::from_secs(1) / rate,
            last: Instant::now(),
            ticks: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.ticks
    }

    /// Ticks closest to `duration` at this rate (at least one).
    pub fn ticks_for(&self, duration: Duration) -> u64 {
        let period = self.period.as_nanos().max(1);
        (((duration.as_nanos() + period / 2) / period) as u64).max(1)
    }

    /// End-of-tick rate cap.
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.period {
            std::thread::sleep(self.period - elapsed);
        }
        self.last = Instant::now();
        self.ticks += 1;
    }

    /// Deliberate blocking pause (e.g. after a point is scored). The next
    /// tick's budget starts after the pause.
    pub fn hold(&mut self, duration: Duration) {
        std::thread::sleep(duration);
        self.last = Instant::now();
    }
}
