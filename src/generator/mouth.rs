//! Mouth shape generation
//!
//! Three mutually exclusive strategies, chosen by the caller: an open curved
//! mouth, a tucked-in flipped variant of it, and a small pressed-lips egg.
//! All of them scale off the face's width and height only, so a mouth never
//! depends on which contour shape the face actually drew.

use anyhow::{ensure, Result};
use kurbo::Point;
use serde::Serialize;

use crate::core::rng::RandomSource;
use crate::core::settings::MOUTH_EGG_SEGMENTS;
use crate::geometry::bezier::cubic_bezier;
use crate::geometry::contour::egg_shape_points;

/// Which mouth construction to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MouthVariant {
    /// Corner-to-corner cubic top edge, open or thinly closed underneath.
    OpenCurve,
    /// The open curve recentered, flipped and compressed toward the chin.
    TuckedCurve,
    /// A small rotated egg outline, lips pressed together.
    PressedLips,
}

impl MouthVariant {
    /// Uniform pick across the three variants.
    pub fn pick<R: RandomSource>(rng: &mut R) -> MouthVariant {
        match (rng.unit() * 3.0) as usize {
            0 => MouthVariant::OpenCurve,
            1 => MouthVariant::TuckedCurve,
            _ => MouthVariant::PressedLips,
        }
    }
}

/// Corner points and interior controls for the curved mouth top edge.
/// `upper_y_divisor` is the only knob that differs between the two curved
/// variants.
struct MouthFrame {
    left: Point,
    right: Point,
    control0: Point,
    control1: Point,
}

fn draw_frame<R: RandomSource>(
    rng: &mut R,
    face_height: f64,
    face_width: f64,
    upper_y_divisor: f64,
) -> MouthFrame {
    let right_y = rng.uniform(face_height / 7.0, face_height / upper_y_divisor);
    let left_y = rng.uniform(face_height / 7.0, face_height / upper_y_divisor);

    let right_x = rng.uniform(face_width / 10.0, face_width / 2.0);
    let left_x =
        -right_x + rng.uniform(-face_width / 20.0, face_width / 20.0);

    let left = Point::new(left_x, left_y);
    let right = Point::new(right_x, right_y);

    let control0 = Point::new(
        rng.uniform(0.0, right_x),
        rng.uniform(left_y + 5.0, face_height / 1.5),
    );
    let control1 = Point::new(
        rng.uniform(left_x, 0.0),
        rng.uniform(left_y + 5.0, face_height / 1.5),
    );

    MouthFrame {
        left,
        right,
        control0,
        control1,
    }
}

/// Closes the mouth under an already-sampled top edge: either a second
/// independent cubic back along reversed controls (an open, lens-like mouth)
/// or a y-offset blend of the top edge against its own reverse (a thin
/// closed mouth).
fn close_bottom<R: RandomSource>(
    rng: &mut R,
    points: &mut Vec<Point>,
    frame: &MouthFrame,
) {
    if rng.chance_above(0.5) {
        for i in 0..100 {
            points.push(cubic_bezier(
                frame.right,
                frame.control0,
                frame.control1,
                frame.left,
                i as f64 / 100.0,
            ));
        }
    } else {
        let y_offset_portion = rng.uniform(0.0, 0.8);
        for i in 0..100 {
            let t = i as f64 / 100.0;
            let x = points[99].x * (1.0 - t) + points[0].x * t;
            let y = (points[99].y * (1.0 - t) + points[0].y * t)
                * (1.0 - y_offset_portion)
                + points[99 - i].y * y_offset_portion;
            points.push(Point::new(x, y));
        }
    }
}

fn open_curve_mouth<R: RandomSource>(
    rng: &mut R,
    face_height: f64,
    face_width: f64,
) -> Vec<Point> {
    let frame = draw_frame(rng, face_height, face_width, 3.5);

    let mut points = Vec::with_capacity(200);
    for i in 0..100 {
        points.push(cubic_bezier(
            frame.left,
            frame.control1,
            frame.control0,
            frame.right,
            i as f64 / 100.0,
        ));
    }
    close_bottom(rng, &mut points, &frame);
    points
}

fn tucked_curve_mouth<R: RandomSource>(
    rng: &mut R,
    face_height: f64,
    face_width: f64,
) -> Vec<Point> {
    let frame = draw_frame(rng, face_height, face_width, 4.0);

    let mut points = Vec::with_capacity(200);
    for i in 0..100 {
        points.push(cubic_bezier(
            frame.left,
            frame.control1,
            frame.control0,
            frame.right,
            i as f64 / 100.0,
        ));
    }

    // The recentering anchor reads the top edge before the bottom goes on.
    let center = Point::new(
        (frame.right.x + frame.left.x) / 2.0,
        points[25].y / 2.0 + points[75].y / 2.0,
    );

    close_bottom(rng, &mut points, &frame);

    for p in points.iter_mut() {
        let mut x = p.x - center.x;
        let mut y = p.y - center.y;
        y = -y;
        x *= 0.6;
        y *= 0.6;
        *p = Point::new(x + center.x, y + center.y * 0.8);
    }
    points
}

fn pressed_lips_mouth<R: RandomSource>(
    rng: &mut R,
    face_height: f64,
    face_width: f64,
) -> Result<Vec<Point>> {
    let center = Point::new(
        rng.uniform(-face_width / 8.0, face_width / 8.0),
        rng.uniform(face_height / 4.0, face_height / 2.5),
    );

    let a = rng.uniform(face_width / 4.0, face_width / 10.0);
    let b = rng.uniform(face_height / 10.0, face_height / 20.0);
    let mut points =
        egg_shape_points(rng, a, b, 0.001, MOUTH_EGG_SEGMENTS)?;

    let angle = rng.uniform(
        -std::f64::consts::PI / 9.5,
        std::f64::consts::PI / 9.5,
    );
    let (sin, cos) = angle.sin_cos();
    for p in points.iter_mut() {
        let (x, y) = (p.x, p.y);
        *p = Point::new(
            x * cos - y * sin + center.x,
            x * sin + y * cos + center.y,
        );
    }
    Ok(points)
}

/// Generates a mouth point sequence for the chosen variant, scaled to the
/// face dimensions.
pub fn generate_mouth_points<R: RandomSource>(
    rng: &mut R,
    variant: MouthVariant,
    face_height: f64,
    face_width: f64,
) -> Result<Vec<Point>> {
    ensure!(
        face_height > 0.0 && face_width > 0.0,
        "Mouth generation needs positive face dimensions, got {}x{}",
        face_width,
        face_height
    );

    match variant {
        MouthVariant::OpenCurve => {
            Ok(open_curve_mouth(rng, face_height, face_width))
        }
        MouthVariant::TuckedCurve => {
            Ok(tucked_curve_mouth(rng, face_height, face_width))
        }
        MouthVariant::PressedLips => {
            pressed_lips_mouth(rng, face_height, face_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{EntropyRng, MidpointRng};

    #[test]
    fn curved_variants_return_two_hundred_points() {
        let mut rng = EntropyRng::seeded(47);
        for variant in [MouthVariant::OpenCurve, MouthVariant::TuckedCurve] {
            for _ in 0..5 {
                let points =
                    generate_mouth_points(&mut rng, variant, 160.0, 150.0)
                        .unwrap();
                assert_eq!(points.len(), 200);
            }
        }
    }

    #[test]
    fn pressed_lips_trace_a_closed_egg() {
        let mut rng = EntropyRng::seeded(53);
        let points = generate_mouth_points(
            &mut rng,
            MouthVariant::PressedLips,
            160.0,
            150.0,
        )
        .unwrap();
        assert_eq!(points.len(), 4 * MOUTH_EGG_SEGMENTS);
    }

    #[test]
    fn mouths_sit_in_the_lower_face() {
        // The frame's y draws are bounded below by face_height / 7, so every
        // curved mouth's corners sit below the face midline (positive y in
        // the pre-render orientation).
        let mut rng = EntropyRng::seeded(59);
        for _ in 0..10 {
            let points = generate_mouth_points(
                &mut rng,
                MouthVariant::OpenCurve,
                160.0,
                150.0,
            )
            .unwrap();
            assert!(points[0].y > 0.0, "left corner above the midline");
        }
    }

    #[test]
    fn variant_pick_covers_all_three() {
        let mut rng = EntropyRng::seeded(61);
        let mut seen = [false; 3];
        for _ in 0..100 {
            match MouthVariant::pick(&mut rng) {
                MouthVariant::OpenCurve => seen[0] = true,
                MouthVariant::TuckedCurve => seen[1] = true,
                MouthVariant::PressedLips => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn nonpositive_dimensions_fail_fast() {
        let mut rng = MidpointRng;
        assert!(generate_mouth_points(
            &mut rng,
            MouthVariant::OpenCurve,
            0.0,
            150.0
        )
        .is_err());
    }
}
