use std::time::Instant;

use crate::traits::TickSource;

/// Wall clock - reports real time elapsed between ticks
#[derive(Debug)]
pub struct WallClock {
    last_tick: Instant,
}

impl WallClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for WallClock {
    fn next_delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

/// Fixed step - the same delta every tick, for deterministic runs
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    pub interval: f32,
}

impl FixedStep {
    /// Create a source ticking at the given frequency
    pub fn from_hz(hz: f32) -> Self {
        Self { interval: 1.0 / hz }
    }
}

impl TickSource for FixedStep {
    fn next_delta(&mut self) -> f32 {
        self.interval
    }
}
