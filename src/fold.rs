use std::f64::consts::PI;

use crate::table::{Pair, PairTable};
use crate::table_spec::{FOLD_MAX_SIZE, FOLD_SIZE};

/// Domain half-width of the fold curve.
pub const FOLDS: f64 = 6.0;

/// Fraction of full scale the normalized fold output may reach.
pub const HEADROOM: f64 = 0.92;

const EPSILON: f64 = 0.00001;

/// Brings `p` into `[0, 1)` by whole steps.
#[inline]
pub fn wrap_unit(mut p: f64) -> f64 {
    loop {
        if p >= 1.0 {
            p -= 1.0;
        } else if p < 0.0 {
            // a tiny negative p can round up to exactly 1.0 here
            p += 1.0;
        } else {
            return p;
        }
    }
}

/// Folder response at table index `i`.
pub fn fold_sample(i: usize) -> f64 {
    // size - 3 centers the zero crossing on index 511
    let x = i as f64 / (FOLD_SIZE - 3) as f64;
    let x = FOLDS * (2.0 * x - 1.0);
    let g = 1.0 / (1.0 + x.abs());
    let p = wrap_unit(16.0 / (2.0 * PI) * x * g);
    -g * (x + (p * PI * 2.0).sin())
}

/// First pair is `(v_0, 0)`, later pairs are `(v_{i-1}, v_i - v_{i-1})`.
pub fn generate() -> PairTable {
    let mut prev = 0.0;
    let pairs = (0..FOLD_SIZE)
        .map(|i| {
            let v = fold_sample(i);
            let pair = if i == 0 {
                Pair::new(v, 0.0)
            } else {
                Pair::new(prev, v - prev)
            };
            prev = v;
            pair
        })
        .collect();

    PairTable::from_pairs(pairs)
}

/// Per-position gain keeping the folded signal under [`HEADROOM`], from a
/// running peak over the stored values of the upper half. The stored column
/// lags the curve by one sample, so the scan opens on the zero crossing.
pub fn generate_max(fold: &PairTable) -> Vec<f64> {
    let start = (FOLD_SIZE - 1) / 2;
    let mut max = 0.0f64;

    fold.pairs()[start..start + FOLD_MAX_SIZE]
        .iter()
        .map(|p| {
            max = max.max(p.value.abs());
            HEADROOM / (max + EPSILON)
        })
        .collect()
}
