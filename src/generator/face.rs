//! Face contour composition
//!
//! Two independently generated contours (egg or rounded rectangle) are
//! blended into one closed outline. The second contour is read with a
//! quarter-length rotational offset and its coordinates are swapped into the
//! mix, which shears the outline just enough that no face comes out as a
//! clean ellipse.

use anyhow::Result;
use kurbo::{Point, Vec2};
use serde::Serialize;

use crate::core::rng::RandomSource;
use crate::core::settings::FACE_SEGMENT_POINTS;
use crate::geometry::contour::{egg_shape_points, rectangle_contour_points};

/// A composed face outline with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceContour {
    /// Closed outline of `4 * segment_points + 2` points; the first two
    /// points are re-appended at the end so consumers can traverse the
    /// closing run without wrapping indices.
    pub points: Vec<Point>,
    /// Horizontal extent, measured across the pre-closure sequence.
    pub width: f64,
    /// Vertical extent, measured across the pre-closure sequence.
    pub height: f64,
    /// Always the origin; the outline is recentered before it is returned.
    pub center: Point,
}

impl FaceContour {
    /// The outline without the two trailing closure points.
    pub fn open_points(&self) -> &[Point] {
        &self.points[..self.points.len() - 2]
    }
}

/// Generates a face outline with the default sampling density.
pub fn generate_face_contour<R: RandomSource>(
    rng: &mut R,
) -> Result<FaceContour> {
    generate_face_contour_with(rng, FACE_SEGMENT_POINTS)
}

/// Generates a face outline with `num_points` samples per contour quadrant.
pub fn generate_face_contour_with<R: RandomSource>(
    rng: &mut R,
    num_points: usize,
) -> Result<FaceContour> {
    let size_x0 = rng.uniform(50.0, 100.0);
    let size_y0 = rng.uniform(70.0, 100.0);
    let size_y1 = rng.uniform(50.0, 80.0);
    let size_x1 = rng.uniform(70.0, 100.0);

    let k0_magnitude = rng.uniform(0.001, 0.005);
    let k0 = if rng.chance_above(0.5) { k0_magnitude } else { -k0_magnitude };
    let k1_magnitude = rng.uniform(0.001, 0.005);
    let k1 = if rng.chance_above(0.5) { k1_magnitude } else { -k1_magnitude };

    let translate0 = Vec2::new(rng.uniform(-5.0, 5.0), rng.uniform(-15.0, 15.0));
    let translate1 = Vec2::new(rng.uniform(-5.0, 25.0), rng.uniform(-5.0, 5.0));

    let egg0 = rng.chance_above(0.1);
    let egg1 = rng.chance_above(0.3);

    let contour0 = if egg0 {
        egg_shape_points(rng, size_x0, size_y0, k0, num_points)?
    } else {
        rectangle_contour_points(rng, size_x0, size_y0, num_points)?
    };
    let contour1 = if egg1 {
        egg_shape_points(rng, size_x1, size_y1, k1, num_points)?
    } else {
        rectangle_contour_points(rng, size_x1, size_y1, num_points)?
    };

    let len = contour0.len();
    let contour0: Vec<Point> = contour0.into_iter().map(|p| p + translate0).collect();
    let contour1: Vec<Point> = contour1.into_iter().map(|p| p + translate1).collect();

    // Index-wise blend: contour 1 is read a quarter turn ahead and its
    // coordinates swap roles in the mix.
    let mut blended = Vec::with_capacity(len + 2);
    let mut center = Vec2::ZERO;
    for i in 0..len {
        let mix0 = contour0[i];
        let mix1 = contour1[(i + len / 4) % len];
        let p = Point::new(
            mix0.x * 0.7 + mix1.y * 0.3,
            mix0.y * 0.7 - mix1.x * 0.3,
        );
        center += p.to_vec2();
        blended.push(p);
    }

    let center = center / len as f64;
    for p in &mut blended {
        *p -= center;
    }

    // Width and height index the sequence before the closure points go on.
    let width = blended[0].x - blended[len / 2].x;
    let height = blended[len / 4].y - blended[len * 3 / 4].y;

    blended.push(blended[0]);
    blended.push(blended[1]);

    Ok(FaceContour {
        points: blended,
        width,
        height,
        center: Point::ORIGIN,
    })
}
