/// Most ticks a single `accumulate` call may release.
pub const MAX_TICKS_PER_CALL: u32 = 10;

/// Fixed-interval tick accumulator.
/// The host feeds it elapsed wall-clock time; it answers how many ticks to run.
/// Stopping the simulation is simply not calling it any more.
pub struct Scheduler {
    /// Milliseconds per tick.
    interval_ms: f64,
    /// Elapsed time not yet spent on a tick.
    accumulator: f64,
}

impl Scheduler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulator: 0.0,
        }
    }

    /// Add elapsed time. Returns the number of ticks to run.
    pub fn accumulate(&mut self, elapsed_ms: f64) -> u32 {
        self.accumulator += elapsed_ms.max(0.0);
        // Cap so a long stall cannot snowball into ever-longer catch-up frames
        self.accumulator = self.accumulator.min(self.interval_ms * MAX_TICKS_PER_CALL as f64);
        let ticks = (self.accumulator / self.interval_ms) as u32;
        self.accumulator -= ticks as f64 * self.interval_ms;
        ticks
    }

    /// Fraction of the next tick already elapsed (0.0 to 1.0).
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.interval_ms
    }

    /// Milliseconds per tick.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}
