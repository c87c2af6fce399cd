// High-precision timing utilities for the container benchmarks

use std::time::{Duration, Instant};

pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn start() -> Self {
        Self::new()
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Time a single execution of `f`. The operation runs exactly once,
/// synchronously, on the calling thread; whatever it does to captured
/// state has happened by the time this returns.
pub fn time_once<F>(f: F) -> Duration
where
    F: FnOnce(),
{
    let timer = Timer::start();
    f();
    timer.elapsed()
}
