//! Bezier evaluation helpers
//!
//! Cubic curves go through kurbo; the general-degree Bernstein evaluator is
//! what the hair generator fits its sampled contour points with, since those
//! control lists grow well past degree three.

use anyhow::{ensure, Result};
use kurbo::{CubicBez, ParamCurve, Point};

use crate::core::settings::MAX_BEZIER_CONTROL_POINTS;

/// Evaluates the cubic with the given control points at `t`.
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    CubicBez::new(p0, p1, p2, p3).eval(t)
}

/// Samples `curve` at `samples` evenly spaced parameters, t = i / samples for
/// i in 0..samples. The endpoint t = 1 is deliberately left out; the eyelid
/// blending indexes this half-open sampling.
pub fn sample_cubic(curve: &CubicBez, samples: usize) -> Vec<Point> {
    (0..samples)
        .map(|i| curve.eval(i as f64 / samples as f64))
        .collect()
}

fn factorial(n: usize) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

fn binomial(n: usize, k: usize) -> f64 {
    factorial(n) / (factorial(k) * factorial(n - k))
}

/// Evaluates the Bernstein-form Bezier defined by `control_points` at `t`.
///
/// Degree is `control_points.len() - 1`. The factorial-based coefficients are
/// exact for the control list sizes the generators produce; lists longer than
/// [`MAX_BEZIER_CONTROL_POINTS`] are rejected rather than allowed to drift.
pub fn bezier_point(control_points: &[Point], t: f64) -> Result<Point> {
    ensure!(
        !control_points.is_empty(),
        "Bezier evaluation needs at least one control point"
    );
    ensure!(
        control_points.len() <= MAX_BEZIER_CONTROL_POINTS,
        "Too many Bezier control points: {} (max {})",
        control_points.len(),
        MAX_BEZIER_CONTROL_POINTS
    );

    let n = control_points.len() - 1;
    let mut x = 0.0;
    let mut y = 0.0;
    for (i, p) in control_points.iter().enumerate() {
        let coeff = binomial(n, i)
            * (1.0 - t).powi((n - i) as i32)
            * t.powi(i as i32);
        x += coeff * p.x;
        y += coeff * p.y;
    }
    Ok(Point::new(x, y))
}

/// Returns `segments + 1` evenly spaced samples of the curve over t in [0, 1].
pub fn compute_bezier_curve(
    control_points: &[Point],
    segments: usize,
) -> Result<Vec<Point>> {
    ensure!(segments >= 1, "Bezier sampling needs at least one segment");
    (0..=segments)
        .map(|i| bezier_point(control_points, i as f64 / segments as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_hits_its_endpoints_exactly() {
        let p0 = Point::new(-12.5, 3.0);
        let p1 = Point::new(4.0, 40.0);
        let p2 = Point::new(9.0, -17.0);
        let p3 = Point::new(31.0, 8.5);

        assert_eq!(cubic_bezier(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn bernstein_matches_the_cubic_evaluator() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 25.0),
            Point::new(20.0, -5.0),
            Point::new(30.0, 10.0),
        ];
        let sampled = compute_bezier_curve(&pts, 20).unwrap();
        assert_eq!(sampled.len(), 21);

        for (i, sample) in sampled.iter().enumerate() {
            let t = i as f64 / 20.0;
            let cubic = cubic_bezier(pts[0], pts[1], pts[2], pts[3], t);
            assert!(
                (sample.x - cubic.x).abs() < 1e-9
                    && (sample.y - cubic.y).abs() < 1e-9,
                "evaluators disagree at t={t}: {sample:?} vs {cubic:?}"
            );
        }
    }

    #[test]
    fn degenerate_control_lists_are_rejected() {
        assert!(bezier_point(&[], 0.5).is_err());

        let too_many = vec![Point::ZERO; MAX_BEZIER_CONTROL_POINTS + 1];
        assert!(bezier_point(&too_many, 0.5).is_err());
    }

    #[test]
    fn single_control_point_is_a_constant_curve() {
        let p = Point::new(3.0, -7.0);
        let curve = compute_bezier_curve(&[p], 4).unwrap();
        assert!(curve.iter().all(|q| *q == p));
    }
}
