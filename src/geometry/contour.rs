//! Closed randomized contours
//!
//! Both generators sample one quadrant of angles over [0, PI/2], jitter each
//! angle, and mirror the samples into the other three quadrants with sign
//! flips. The pass order (two ascending, two descending) keeps the final
//! sequence tracing the boundary continuously, so consumers can treat it as
//! one closed loop of `4 * segment_points` points.

use std::f64::consts::{FRAC_PI_2, PI};

use anyhow::{ensure, Result};
use kurbo::Point;

use crate::core::errors::validate_half_extents;
use crate::core::rng::RandomSource;

/// One jittered sample of the egg curve. The y sign is applied before the
/// radial formula because the asymmetry term `1 + k*y` reads the signed y.
fn egg_sample<R: RandomSource>(
    rng: &mut R,
    degree: f64,
    a: f64,
    b: f64,
    k: f64,
    sign_x: f64,
    sign_y: f64,
) -> Point {
    let y = degree.sin() * b * sign_y;
    let radial = ((1.0 - (y * y) / (b * b)) / (1.0 + k * y)) * a * a;
    let x = sign_x * radial.sqrt() + rng.uniform(-a / 200.0, a / 200.0);
    Point::new(x, y)
}

/// Egg-shaped closed contour with half-extents `a` (horizontal) and `b`
/// (vertical).
///
/// `k` controls how quickly the curve flattens toward one pole; callers keep
/// its magnitude within [0.001, 0.005], which keeps `1 + k*y` comfortably
/// positive for every |y| <= b. Values outside that range are a precondition
/// violation, not a handled case.
pub fn egg_shape_points<R: RandomSource>(
    rng: &mut R,
    a: f64,
    b: f64,
    k: f64,
    segment_points: usize,
) -> Result<Vec<Point>> {
    validate_half_extents(a, b)?;
    ensure!(
        segment_points >= 1,
        "Egg contour needs at least one sample per quadrant"
    );

    let step = FRAC_PI_2 / segment_points as f64;
    let jitter = PI / 1.1 / segment_points as f64;
    let mut result = Vec::with_capacity(segment_points * 4);

    for i in 0..segment_points {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        result.push(egg_sample(rng, degree, a, b, k, 1.0, 1.0));
    }
    for i in (1..=segment_points).rev() {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        result.push(egg_sample(rng, degree, a, b, k, -1.0, 1.0));
    }
    for i in 0..segment_points {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        result.push(egg_sample(rng, degree, a, b, k, -1.0, -1.0));
    }
    for i in (1..=segment_points).rev() {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        result.push(egg_sample(rng, degree, a, b, k, 1.0, -1.0));
    }

    Ok(result)
}

/// Intersection of a ray from the origin at `radian` with the axis-aligned
/// rectangle of half-extents (a, b), in the first quadrant.
///
/// The angle is clamped into [0, PI/2]; near-vertical rays short-circuit to
/// (0, b) before the tangent blows up.
fn edge_intersection(radian: f64, a: f64, b: f64) -> Point {
    let radian = radian.clamp(0.0, FRAC_PI_2);
    if (radian - FRAC_PI_2).abs() < 1e-4 {
        return Point::new(0.0, b);
    }

    let m = radian.tan();
    let y = m * a;
    if y < b {
        Point::new(a, y)
    } else {
        Point::new(b / m, b)
    }
}

/// Rounded-rectangle closed contour with half-extents `a` and `b`.
///
/// Same quadrant discipline as [`egg_shape_points`], with a tighter angle
/// jitter so the corners stay crisp.
pub fn rectangle_contour_points<R: RandomSource>(
    rng: &mut R,
    a: f64,
    b: f64,
    segment_points: usize,
) -> Result<Vec<Point>> {
    validate_half_extents(a, b)?;
    ensure!(
        segment_points >= 1,
        "Rectangle contour needs at least one sample per quadrant"
    );

    let step = FRAC_PI_2 / segment_points as f64;
    let jitter = PI / 11.0 / segment_points as f64;
    let mut result = Vec::with_capacity(segment_points * 4);

    for i in 0..segment_points {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        let p = edge_intersection(degree, a, b);
        result.push(Point::new(p.x, p.y));
    }
    for i in (1..=segment_points).rev() {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        let p = edge_intersection(degree, a, b);
        result.push(Point::new(-p.x, p.y));
    }
    for i in 0..segment_points {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        let p = edge_intersection(degree, a, b);
        result.push(Point::new(-p.x, -p.y));
    }
    for i in (1..=segment_points).rev() {
        let degree = step * i as f64 + rng.uniform(-jitter, jitter);
        let p = edge_intersection(degree, a, b);
        result.push(Point::new(p.x, -p.y));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{EntropyRng, MidpointRng};

    #[test]
    fn egg_contour_has_four_quadrants_of_points() {
        let mut rng = EntropyRng::seeded(11);
        let points = egg_shape_points(&mut rng, 80.0, 95.0, 0.003, 25).unwrap();
        assert_eq!(points.len(), 100);
    }

    #[test]
    fn egg_contour_stays_inside_jittered_bounds() {
        let a = 80.0;
        let b = 95.0;
        let mut rng = EntropyRng::seeded(13);
        for k in [0.001, 0.005, -0.001, -0.005] {
            let points = egg_shape_points(&mut rng, a, b, k, 50).unwrap();
            // The asymmetry term lets x overshoot `a` slightly on the skewed
            // side; with |k*b| <= 0.475 the radial factor tops out below 1.04.
            let x_bound = a * 1.04 + a / 200.0;
            for p in &points {
                assert!(
                    p.x.abs() <= x_bound,
                    "x={} beyond skewed half-extent for k={k}",
                    p.x
                );
                assert!(
                    p.y.abs() <= b + 1e-9,
                    "y={} beyond vertical half-extent for k={k}",
                    p.y
                );
            }
        }
    }

    #[test]
    fn rectangle_contour_stays_inside_the_rectangle() {
        let a = 70.0;
        let b = 90.0;
        let mut rng = EntropyRng::seeded(17);
        let points = rectangle_contour_points(&mut rng, a, b, 50).unwrap();
        assert_eq!(points.len(), 200);
        for p in &points {
            assert!(p.x.abs() <= a + 1e-9, "x={} outside rectangle", p.x);
            assert!(p.y.abs() <= b + 1e-9, "y={} outside rectangle", p.y);
        }
    }

    #[test]
    fn rectangle_angles_progress_monotonically_without_jitter() {
        // Midpoint draws zero the jitter, so the first-quadrant pass must
        // sweep strictly increasing angles from the positive x axis.
        let mut rng = MidpointRng;
        let points = rectangle_contour_points(&mut rng, 70.0, 90.0, 40).unwrap();
        let mut last = -1.0;
        for p in &points[..40] {
            let angle = p.y.atan2(p.x);
            assert!(
                angle > last,
                "angle {angle} did not progress past {last}"
            );
            last = angle;
        }
    }

    #[test]
    fn vertical_ray_hits_the_top_edge_center() {
        let p = edge_intersection(FRAC_PI_2, 70.0, 90.0);
        assert_eq!(p, Point::new(0.0, 90.0));

        // Out-of-range angles clamp instead of wrapping.
        let p = edge_intersection(2.0, 70.0, 90.0);
        assert_eq!(p, Point::new(0.0, 90.0));
        let p = edge_intersection(-0.5, 70.0, 90.0);
        assert_eq!(p, Point::new(70.0, 0.0));
    }

    #[test]
    fn bad_extents_fail_fast() {
        let mut rng = MidpointRng;
        assert!(egg_shape_points(&mut rng, -1.0, 10.0, 0.001, 10).is_err());
        assert!(egg_shape_points(&mut rng, 10.0, 0.0, 0.001, 10).is_err());
        assert!(rectangle_contour_points(&mut rng, 10.0, 10.0, 0).is_err());
    }
}
