//! Fixed timestep frame clock
//!
//! Accumulates real elapsed time and reports how many simulation ticks are
//! due, capped so a long stall can't snowball into an ever-growing backlog.

use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, TICK_RATE};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            last: Instant::now(),
        }
    }

    /// Length of one tick
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed `elapsed` real time; returns the number of ticks to run now
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }
        // Drop whatever backlog the cap left behind
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Block until at least one tick is due, then return how many are
    pub fn wait(&mut self) -> u32 {
        loop {
            let now = Instant::now();
            let due = self.advance(now - self.last);
            self.last = now;
            if due > 0 {
                return due;
            }
            std::thread::sleep(self.step - self.accumulator);
        }
    }
}
