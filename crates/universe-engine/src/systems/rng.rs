//! Random source for spawning. Only body creation draws from it; the tick
//! itself is deterministic, so one seed replays a whole run.

/// xorshift64 state. Zero is a fixed point of the shift sequence, so a zero
/// seed is bumped to one.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Index in `0..len`. `len` must be non-zero.
    pub fn index_below(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }

    /// Uniform in [0, 1), built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [lo, lo + span).
    pub fn range(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.next_f64() * span
    }
}
