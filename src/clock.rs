//! Time sources for driving the generation sequence.

use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Wait for `duration` to pass.
    fn sleep(&mut self, duration: Duration);

    /// Time elapsed since the clock was created.
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time with real sleeps.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when slept on. Sequences run instantly.
#[derive(Debug, Default, Clone)]
pub struct VirtualClock {
    now: Duration,
    sleeps: usize,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-zero sleeps taken.
    pub fn sleeps(&self) -> usize {
        self.sleeps
    }
}

impl Clock for VirtualClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            self.now += duration;
            self.sleeps += 1;
        }
    }

    fn elapsed(&self) -> Duration {
        self.now
    }
}
