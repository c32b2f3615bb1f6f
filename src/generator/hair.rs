//! Hair strand generation
//!
//! Every strategy samples points along the face contour (with its two
//! closure points stripped), fits a Bezier through them, and returns a list
//! of independent strands. Index walks wrap with euclidean remainders, so a
//! walk may run off either end of the sequence and keep going.

use anyhow::{ensure, Result};
use kurbo::Point;
use serde::Serialize;

use crate::core::rng::RandomSource;
use crate::core::settings::HAIR_MERGE_DISTANCE;
use crate::geometry::bezier::compute_bezier_curve;

/// Which strand construction to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HairVariant {
    /// Two contour walks per strand, blended root-to-tip.
    Woven,
    /// Every strand point picked independently; chaotic wisps.
    Wisps,
    /// Contour-ordered roots with radial scaling and greedy merging.
    Swept,
    /// A split point decides each strand's walk direction; flat strands.
    Parted,
}

/// Strand count in [15, 25) drawn the way every strategy sizes its strands.
fn strand_points<R: RandomSource>(rng: &mut R) -> usize {
    (20.0 + rng.uniform(-5.0, 5.0).floor()) as usize
}

/// Contour index for a wrapped backward walk of `steps` from the end.
fn wrap_index(len: usize, steps: i64) -> usize {
    let len = len as i64;
    (len - steps).rem_euclid(len) as usize
}

/// Whether a freshly built strand joins the previous one. Merging needs both
/// the coin flip and endpoints closer than [`HAIR_MERGE_DISTANCE`].
fn merge_gate(coin: bool, distance: f64) -> bool {
    coin && distance < HAIR_MERGE_DISTANCE
}

fn woven_strands<R: RandomSource>(
    rng: &mut R,
    contour: &[Point],
    num_strands: usize,
) -> Result<Vec<Vec<Point>>> {
    let len = contour.len();
    let mut results = Vec::with_capacity(num_strands);

    for _ in 0..num_strands {
        let n = strand_points(rng);

        let offset = rng.uniform(30.0, 140.0).floor() as i64;
        let forward: Vec<Point> = (0..n)
            .map(|j| contour[wrap_index(len, j as i64 + offset)])
            .collect();
        let d0 = compute_bezier_curve(&forward, n)?;

        let offset = rng.uniform(30.0, 140.0).floor() as i64;
        let backward: Vec<Point> = (0..n)
            .map(|j| contour[wrap_index(len, offset - j as i64)])
            .collect();
        let d1 = compute_bezier_curve(&backward, n)?;

        // The squared weight favors the backward walk at the root and the
        // forward walk at the tip.
        let strand: Vec<Point> = (0..n)
            .map(|j| {
                let portion = (j as f64 / n as f64).powi(2);
                Point::new(
                    d0[j].x * portion + d1[j].x * (1.0 - portion),
                    d0[j].y * portion + d1[j].y * (1.0 - portion),
                )
            })
            .collect();
        results.push(strand);
    }

    Ok(results)
}

fn wisp_strands<R: RandomSource>(
    rng: &mut R,
    contour: &[Point],
    num_strands: usize,
) -> Result<Vec<Vec<Point>>> {
    let len = contour.len();
    let mut results = Vec::with_capacity(num_strands);

    for _ in 0..num_strands {
        let n = strand_points(rng);
        let mut line = Vec::with_capacity(n + 1);
        for _ in 0..n + 1 {
            let pick = rng.uniform(20.0, 160.0).floor() as i64;
            line.push(contour[wrap_index(len, pick)]);
        }
        results.push(compute_bezier_curve(&line, n)?);
    }

    Ok(results)
}

fn swept_strands<R: RandomSource>(
    rng: &mut R,
    contour: &[Point],
    num_strands: usize,
) -> Result<Vec<Vec<Point>>> {
    let len = contour.len();
    let mut results: Vec<Vec<Point>> = Vec::with_capacity(num_strands);

    let mut roots: Vec<i64> = (0..num_strands)
        .map(|_| rng.uniform(10.0, 180.0).floor() as i64)
        .collect();
    roots.sort_unstable();

    for &offset in &roots {
        let n = strand_points(rng);
        let lower = rng.uniform(0.8, 1.4);
        let direction: i64 = if rng.chance_above(0.5) { 1 } else { -1 };

        let mut line = Vec::with_capacity(n);
        for j in 0..n {
            let powerscale = rng.uniform(0.1, 3.0);
            let portion = (1.0 - (j as f64 / n as f64).powf(powerscale))
                * (1.0 - lower)
                + lower;
            let p = contour[wrap_index(len, direction * j as i64 + offset)];
            line.push(Point::new(p.x * portion, p.y * portion));
        }

        let mut strand = compute_bezier_curve(&line, n)?;
        if rng.chance_above(0.7) {
            strand.reverse();
        }

        // Greedy, order-dependent merge with the previous strand only.
        if let Some(last) = results.last_mut() {
            let tail = last[last.len() - 1];
            let distance = tail.distance(strand[0]);
            let coin = rng.chance_above(0.5);
            if merge_gate(coin, distance) {
                last.extend(strand);
                continue;
            }
        }
        results.push(strand);
    }

    Ok(results)
}

fn parted_strands<R: RandomSource>(
    rng: &mut R,
    contour: &[Point],
    num_strands: usize,
) -> Result<Vec<Vec<Point>>> {
    let len = contour.len();
    let mut results = Vec::with_capacity(num_strands);

    let mut roots: Vec<i64> = (0..num_strands)
        .map(|_| rng.uniform(10.0, 180.0).floor() as i64)
        .collect();
    roots.sort_unstable();

    let split_point = rng.uniform(0.0, 200.0).floor() as i64;

    for &offset in &roots {
        let n = (30.0 + rng.uniform(-8.0, 8.0).floor()) as usize;

        let mut lower = rng.uniform(1.0, 2.3);
        if rng.chance_above(0.9) {
            lower = rng.uniform(0.0, 1.0);
        }

        // All roots past the split sweep one way, the rest the other.
        let direction: i64 = if offset > split_point { 1 } else { -1 };

        let mut line = Vec::with_capacity(n);
        for j in 0..n {
            let powerscale = rng.uniform(0.1, 3.0);
            let portion = (1.0 - (j as f64 / n as f64).powf(powerscale))
                * (1.0 - lower)
                + lower;
            let p =
                contour[wrap_index(len, direction * j as i64 * 2 + offset)];
            // Only x gets the radial scaling; these strands stay flat.
            line.push(Point::new(p.x * portion, p.y));
        }

        results.push(compute_bezier_curve(&line, n)?);
    }

    Ok(results)
}

/// Generates hair strands of the chosen variant along `face_points` (a face
/// contour including its two trailing closure points).
pub fn generate_hair_strands<R: RandomSource>(
    rng: &mut R,
    variant: HairVariant,
    face_points: &[Point],
    num_strands: usize,
) -> Result<Vec<Vec<Point>>> {
    ensure!(
        face_points.len() > 2,
        "Hair generation needs a face contour with closure points, got {} points",
        face_points.len()
    );
    let contour = &face_points[..face_points.len() - 2];

    match variant {
        HairVariant::Woven => woven_strands(rng, contour, num_strands),
        HairVariant::Wisps => wisp_strands(rng, contour, num_strands),
        HairVariant::Swept => swept_strands(rng, contour, num_strands),
        HairVariant::Parted => parted_strands(rng, contour, num_strands),
    }
}
