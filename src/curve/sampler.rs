//! Evenly spaced sampling of shaping functions over full stick travel.

use crate::curve::{CurveError, Result, split_blend};
use crate::domain::{CurvePoint, CurveSample, STICK_MAX, STICK_MIN};

/// Generate `count` linearly spaced points between `min` and `max` (inclusive).
///
/// The first value is exactly `min` and the last exactly `max`.
pub fn lin_space(min: f64, max: f64, count: usize) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(CurveError::InvalidPointCount { count });
    }

    let step = (max - min) / (count as f64 - 1.0);
    let mut out: Vec<f64> = (0..count).map(|i| min + step * i as f64).collect();
    out[count - 1] = max;
    Ok(out)
}

/// Sample any shaping function at `count` inputs spanning `[-100, 100]`.
pub fn sample_fn(count: usize, f: impl Fn(f64) -> f64) -> Result<CurveSample> {
    Ok(lin_space(STICK_MIN, STICK_MAX, count)?
        .into_iter()
        .map(|x| CurvePoint { x, y: f(x) })
        .collect())
}

/// Split-rate table: `count` points from -100 to 100 through [`split_blend`].
pub fn generate_table(count: usize, down: f64, up: f64) -> Result<CurveSample> {
    sample_fn(count, |x| split_blend(x, down, up))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::cubic_blend;

    #[test]
    fn lin_space_endpoints_exact() {
        let xs = lin_space(-100.0, 100.0, 7).unwrap();
        assert_eq!(xs.len(), 7);
        assert_eq!(xs[0], -100.0);
        assert_eq!(xs[6], 100.0);
        assert_eq!(xs[3], 0.0);

        let rates = lin_space(0.0, 50.0, 11).unwrap();
        assert_eq!(rates[0], 0.0);
        assert_eq!(rates[10], 50.0);
        assert!((rates[1] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn table_shape_and_order() {
        let t = generate_table(7, 15.0, 25.0).unwrap();
        assert_eq!(t.len(), 7);
        assert_eq!(t[0].x, -100.0);
        assert_eq!(t[6].x, 100.0);
        for w in t.windows(2) {
            assert!(w[1].x > w[0].x);
        }
    }

    #[test]
    fn two_points_are_the_endpoints() {
        let t = generate_table(2, 40.0, 60.0).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].x, -100.0);
        assert_eq!(t[1].x, 100.0);
    }

    #[test]
    fn degenerate_counts_are_rejected() {
        assert_eq!(
            generate_table(1, 15.0, 25.0),
            Err(CurveError::InvalidPointCount { count: 1 })
        );
        assert_eq!(
            generate_table(0, 15.0, 25.0),
            Err(CurveError::InvalidPointCount { count: 0 })
        );
    }

    #[test]
    fn intro_table_values() {
        let t = generate_table(7, 15.0, 25.0).unwrap();
        let expected_x = [-100.0, -66.67, -33.33, 0.0, 33.33, 66.67, 100.0];
        for (p, x) in t.iter().zip(expected_x) {
            assert!((p.x - x).abs() < 0.01, "x={} expected {x}", p.x);
        }

        assert!((t[6].y - 100.0).abs() < 1e-9);
        assert!((t[0].y + 100.0).abs() < 1e-9);
        assert_eq!(t[3].y, 0.0);

        // Positive side uses up=25: (0.25·(1/3)³ + 0.75·(1/3))·100 ≈ 25.93
        assert!((t[4].y - 25.925_925_9).abs() < 1e-6, "y={}", t[4].y);
        // Negative side uses down=15: -(0.15·(1/3)³ + 0.85·(1/3))·100 ≈ -28.89
        assert!((t[2].y + 28.888_888_9).abs() < 1e-6, "y={}", t[2].y);
    }

    #[test]
    fn stronger_rate_flattens_more() {
        let gentle = generate_table(7, 15.0, 25.0).unwrap();
        let strong = generate_table(7, 50.0, 75.0).unwrap();
        for i in [4, 5] {
            assert!(strong[i].y < gentle[i].y, "i={i}");
        }
        for i in [1, 2] {
            assert!(strong[i].y > gentle[i].y, "i={i}");
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate_table(21, 33.0, 66.0), generate_table(21, 33.0, 66.0));
    }

    #[test]
    fn sample_fn_matches_blend() {
        let s = sample_fn(5, |x| cubic_blend(x, 40.0)).unwrap();
        for p in &s {
            assert_eq!(p.y, cubic_blend(p.x, 40.0));
        }
    }
}
