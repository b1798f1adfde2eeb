use serde::Serialize;

use crate::table_spec::{self, TableSpec};
use crate::{cheby, fold, sine, triangles};

/// A stored sample and a step, so the engine can interpolate with a
/// single multiply-add.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pair {
    pub value: f64,
    pub delta: f64,
}

impl Pair {
    pub const fn new(value: f64, delta: f64) -> Self {
        Self { value, delta }
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.value + self.delta
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PairTable {
    pairs: Vec<Pair>,
}

impl PairTable {
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.pairs.iter().map(|p| p.value)
    }

    pub fn deltas(&self) -> impl Iterator<Item = f64> + '_ {
        self.pairs.iter().map(|p| p.delta)
    }

    /// Sampled curve `[v_0, v_0 + d_1, ...]` for tables whose first pair
    /// carries a zero delta and every later pair holds the previous sample.
    pub fn curve(&self) -> Vec<f64> {
        self.pairs.iter().map(Pair::end).collect()
    }

    /// Linear lookup over `[0, 1]`, reading `value + frac * delta` of the
    /// enclosing segment.
    pub fn lerp(&self, position: f32) -> f64 {
        let n = self.pairs.len();
        if n == 0 {
            return 0.0;
        }
        if n == 1 {
            return self.pairs[0].value;
        }
        let table_pos = f64::from(position.clamp(0.0, 1.0)) * (n - 1) as f64;
        let index = (table_pos as usize).min(n - 2);
        let frac = table_pos - index as f64;
        let pair = &self.pairs[index];
        pair.value + frac * pair.delta
    }
}

/// Every table the engine loads at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tables {
    pub sine: PairTable,
    pub cheby: Vec<Vec<f32>>,
    pub fold: PairTable,
    pub fold_max: Vec<f64>,
    pub triangles: Vec<Vec<f32>>,
}

impl Tables {
    pub fn generate() -> Self {
        let sine = sine::generate();
        let cheby = cheby::generate();
        let fold = fold::generate();
        let triangles = triangles::generate();
        // needs the whole fold table
        let fold_max = fold::generate_max(&fold);

        Self {
            sine,
            cheby,
            fold,
            fold_max,
            triangles,
        }
    }

    /// Number of stored elements per table, in `table_spec::ALL` order.
    pub fn element_counts(&self) -> [(TableSpec, usize); 5] {
        [
            (table_spec::SINE, self.sine.len()),
            (table_spec::CHEBY, grid_len(&self.cheby)),
            (table_spec::FOLD, self.fold.len()),
            (table_spec::FOLD_MAX, self.fold_max.len()),
            (table_spec::TRIANGLES, grid_len(&self.triangles)),
        ]
    }
}

fn grid_len(grid: &[Vec<f32>]) -> usize {
    grid.iter().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> PairTable {
        let pairs = (0..n)
            .map(|i| Pair::new(i as f64, 1.0))
            .collect::<Vec<_>>();
        PairTable::from_pairs(pairs)
    }

    #[test]
    fn test_lerp_linear_ramp() {
        let table = ramp(5);
        assert!((table.lerp(0.0) - 0.0).abs() < 1e-9);
        assert!((table.lerp(0.5) - 2.0).abs() < 1e-6);
        assert!((table.lerp(0.625) - 2.5).abs() < 1e-6);
        assert!((table.lerp(1.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_clamps_position() {
        let table = ramp(3);
        assert_eq!(table.lerp(-1.0), table.lerp(0.0));
        assert_eq!(table.lerp(2.0), table.lerp(1.0));
    }

    #[test]
    fn test_curve_adds_delta() {
        let table = PairTable::from_pairs(vec![
            Pair::new(0.5, 0.0),
            Pair::new(0.5, 0.25),
            Pair::new(0.75, -1.0),
        ]);
        assert_eq!(table.curve(), vec![0.5, 0.75, -0.25]);
    }

    #[test]
    fn test_every_table_has_declared_length() {
        let tables = Tables::generate();
        for (spec, count) in tables.element_counts() {
            assert_eq!(count, spec.element_count(), "{}", spec.name);
        }
        assert_eq!(tables.cheby.len(), table_spec::CHEBY.rows);
        assert_eq!(tables.triangles.len(), table_spec::TRIANGLES.rows);
        for row in tables.cheby.iter() {
            assert_eq!(row.len(), table_spec::CHEBY.len);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = Tables::generate();
        let b = Tables::generate();
        let bits = |t: &PairTable| {
            t.pairs()
                .iter()
                .map(|p| (p.value.to_bits(), p.delta.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&a.sine), bits(&b.sine));
        assert_eq!(bits(&a.fold), bits(&b.fold));
        assert_eq!(
            a.fold_max.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            b.fold_max.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
        assert_eq!(a.cheby, b.cheby);
        assert_eq!(a.triangles, b.triangles);
    }
}
