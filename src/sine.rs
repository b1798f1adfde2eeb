use std::f64::consts::PI;

use crate::table::{Pair, PairTable};
use crate::table_spec::SINE_SIZE;

/// Largest magnitude representable in Q1.15 without wrapping.
pub const Q15_SCALE: f64 = ((1 << 15) - 1) as f64;

/// Two-pole "magic circle" recursion. The amplitude wobbles slightly
/// around 1.0, this is part of the tabulated output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagicCircle {
    omega: f64,
    sin: f64,
    cos: f64,
}

impl MagicCircle {
    /// `frequency` in cycles per step.
    pub fn new(frequency: f64) -> Self {
        Self {
            omega: 2.0 * PI * frequency,
            sin: 0.0,
            cos: 1.0,
        }
    }

    /// `cos` is updated from the already advanced `sin`.
    #[inline]
    pub fn step(&mut self) -> f64 {
        self.sin += self.omega * self.cos;
        self.cos -= self.omega * self.sin;
        self.sin
    }
}

/// Truncates toward zero, matching the integer cast of the fixed-point
/// runtime. No clamping.
#[inline]
pub fn quantize_q15(x: f64) -> i32 {
    (x * Q15_SCALE) as i32
}

pub fn generate() -> PairTable {
    let mut osc = MagicCircle::new(1.0 / (SINE_SIZE - 1) as f64);
    let mut prev = osc.step();

    let pairs = (0..SINE_SIZE)
        .map(|_| {
            let qv = quantize_q15(prev);
            let curr = osc.step();
            let qc = quantize_q15(curr);
            prev = curr;
            Pair::new(f64::from(qv) / Q15_SCALE, f64::from(qc - qv) / Q15_SCALE)
        })
        .collect();

    PairTable::from_pairs(pairs)
}
