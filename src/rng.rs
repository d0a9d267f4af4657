// Seedable 32-bit LCG so a fixed seed replays the exact same launches.

pub struct SimRng {
    state: u32,
}

impl SimRng {
    pub fn new(seed: u32) -> Self {
        SimRng { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        self.state
    }

    /// Uniform in [0, 1), from the high 16 bits (low bits of an LCG are weak).
    pub fn next_f32(&mut self) -> f32 {
        (self.next() >> 16) as f32 / 65536.0
    }

    /// Uniform in [lo, hi).
    pub fn gen_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}
