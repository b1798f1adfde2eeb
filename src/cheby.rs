use crate::table_spec::{CHEBY_SIZE, CHEBY_TABLES};

/// Uniform grid on `[-1, 1]` with both endpoints included.
pub fn ramp(size: usize) -> Vec<f32> {
    let step = 2.0 / (size - 1) as f64;
    (0..size)
        .map(|i| {
            if i == size - 1 {
                1.0
            } else {
                (-1.0 + step * i as f64) as f32
            }
        })
        .collect()
}

/// Chebyshev polynomials of the first kind sampled on [`ramp`], built with
/// `T_n(x) = 2x T_{n-1}(x) - T_{n-2}(x)`. Row 0 is `T_1`, the grid itself,
/// so row `n` holds `T_{n+1}`.
pub fn generate() -> Vec<Vec<f32>> {
    let x = ramp(CHEBY_SIZE);
    let mut rows = Vec::with_capacity(CHEBY_TABLES);

    let square: Vec<f32> = x.iter().map(|&x| 2.0 * x * x - 1.0).collect();
    rows.push(x);
    rows.push(square);

    for n in 2..CHEBY_TABLES {
        let (x, t1, t2) = (&rows[0], &rows[n - 1], &rows[n - 2]);
        let next: Vec<f32> = (0..CHEBY_SIZE)
            .map(|i| 2.0 * x[i] * t1[i] - t2[i])
            .collect();
        rows.push(next);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cheby_dimensions() {
        let rows = generate();
        assert_eq!(rows.len(), CHEBY_TABLES);
        assert!(rows.iter().all(|r| r.len() == CHEBY_SIZE));
    }

    #[test]
    fn test_row0_is_uniform_ramp() {
        let rows = generate();
        let r0 = &rows[0];
        assert_eq!(r0[0], -1.0);
        assert_eq!(r0[CHEBY_SIZE - 1], 1.0);
        assert_eq!(r0[(CHEBY_SIZE - 1) / 2], 0.0);
        let step = 2.0 / (CHEBY_SIZE - 1) as f32;
        for w in r0.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-6);
        }
    }

    #[test]
    fn test_row1_is_second_polynomial() {
        let rows = generate();
        for (&x, &t) in rows[0].iter().zip(rows[1].iter()) {
            assert!((t - (2.0 * x * x - 1.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rows_follow_recurrence() {
        let rows = generate();
        for n in 2..CHEBY_TABLES {
            for i in 0..CHEBY_SIZE {
                let expected = 2.0 * rows[0][i] * rows[n - 1][i] - rows[n - 2][i];
                assert_eq!(rows[n][i], expected, "row {n} column {i}");
            }
        }
    }

    #[test]
    fn test_polynomials_match_closed_form() {
        // T_k(cos t) = cos(k t)
        let rows = generate();
        for n in 0..CHEBY_TABLES {
            for i in (0..CHEBY_SIZE).step_by(16) {
                let x = rows[0][i] as f64;
                let expected = ((n + 1) as f64 * x.acos()).cos();
                assert!((rows[n][i] as f64 - expected).abs() < 1e-4, "row {n} column {i}");
            }
        }
    }

    #[test]
    fn test_values_bounded_at_endpoints() {
        let rows = generate();
        for (n, row) in rows.iter().enumerate() {
            assert!(row.iter().all(|v| v.is_finite() && v.abs() <= 1.0 + 1e-4));
            let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
            assert!((row[0] - sign).abs() < 1e-4, "row {n}");
            assert!((row[CHEBY_SIZE - 1] - 1.0).abs() < 1e-4, "row {n}");
        }
    }
}
