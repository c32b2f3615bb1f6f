//! One-shot face orchestration
//!
//! A single [`generate_avatar`] call composes every generator into an
//! immutable [`GeneratedFace`] value. Each call draws fresh randomness and
//! the returned aggregate fully replaces any previous one; nothing in here
//! holds state between generations.

use anyhow::Result;
use kurbo::{Point, Vec2};
use log::debug;
use serde::Serialize;

use crate::core::rng::RandomSource;
use crate::generator::eyes::{generate_both_eyes, BothEyes};
use crate::generator::face::{generate_face_contour, FaceContour};
use crate::generator::hair::{generate_hair_strands, HairVariant};
use crate::generator::mouth::{generate_mouth_points, MouthVariant};

/// How the hair strands get colored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HairColor {
    /// Index into the natural section of the hair palette.
    Solid(usize),
    /// Rainbow gradient; the middle stop sits at this percentage offset.
    Dyed { offset_percent: f64 },
}

/// Everything one generation produces, ready for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFace {
    /// Overall display scale; stroke widths divide by this.
    pub face_scale: f64,
    /// Thickens the eyelid strokes when set.
    pub sleepless: bool,
    pub contour: FaceContour,
    pub eyes: BothEyes,
    pub distance_between_eyes: f64,
    pub eye_height_offset: f64,
    pub left_eye_offset: Vec2,
    pub right_eye_offset: Vec2,
    /// Pupil anchor inside each eye, in eye-local coordinates.
    pub left_pupil_shift: Point,
    pub right_pupil_shift: Point,
    pub hair: Vec<Vec<Point>>,
    pub hair_color: HairColor,
    pub left_nose_center: Point,
    pub right_nose_center: Point,
    pub mouth_variant: MouthVariant,
    pub mouth: Vec<Point>,
}

/// Generates one complete face.
pub fn generate_avatar<R: RandomSource>(rng: &mut R) -> Result<GeneratedFace> {
    let face_scale = 1.5 + rng.unit() * 0.6;
    let sleepless = rng.chance_above(0.8);

    let contour = generate_face_contour(rng)?;
    let width = contour.width;
    let height = contour.height;

    let eyes = generate_both_eyes(rng, width / 2.0);

    let distance_between_eyes = rng.uniform(width / 4.5, width / 4.0);
    let eye_height_offset = rng.uniform(height / 8.0, height / 6.0);
    let left_eye_offset = Vec2::new(
        rng.uniform(-width / 20.0, width / 10.0),
        rng.uniform(-height / 50.0, height / 50.0),
    );
    let right_eye_offset = Vec2::new(
        rng.uniform(-width / 20.0, width / 10.0),
        rng.uniform(-height / 50.0, height / 50.0),
    );

    // Pupils: each eye blends an upper-lid sample against a lower-lid one.
    let left_ind0 =
        rng.uniform(10.0, eyes.left.upper.len() as f64 - 10.0).floor() as usize;
    let right_ind0 =
        rng.uniform(10.0, eyes.right.upper.len() as f64 - 10.0).floor() as usize;
    let left_ind1 =
        rng.uniform(10.0, eyes.left.upper.len() as f64 - 10.0).floor() as usize;
    let right_ind1 =
        rng.uniform(10.0, eyes.right.upper.len() as f64 - 10.0).floor() as usize;
    let left_lerp = rng.uniform(0.2, 0.8);
    let right_lerp = rng.uniform(0.2, 0.8);

    let left_pupil_shift = Point::new(
        eyes.left.upper[left_ind0].x * left_lerp
            + eyes.left.lower[left_ind1].x * (1.0 - left_lerp),
        eyes.left.upper[left_ind0].y * left_lerp
            + eyes.left.lower[left_ind1].y * (1.0 - left_lerp),
    );
    let right_pupil_shift = Point::new(
        eyes.right.upper[right_ind0].x * right_lerp
            + eyes.right.lower[right_ind1].x * (1.0 - right_lerp),
        eyes.right.upper[right_ind0].y * right_lerp
            + eyes.right.lower[right_ind1].y * (1.0 - right_lerp),
    );

    // Hair: four independent strategies, each with its own strand budget and
    // a chance of sitting this face out entirely.
    let counts: Vec<f64> = (0..4)
        .map(|_| rng.uniform(0.0, 50.0).floor())
        .collect();

    let mut hair: Vec<Vec<Point>> = Vec::new();
    if rng.chance_above(0.3) {
        hair = generate_hair_strands(
            rng,
            HairVariant::Woven,
            &contour.points,
            counts[0] as usize + 10,
        )?;
    }
    if rng.chance_above(0.3) {
        // A fractional budget still runs its partial iteration.
        let budget = (counts[1] / 1.5 + 10.0).ceil() as usize;
        hair.extend(generate_hair_strands(
            rng,
            HairVariant::Wisps,
            &contour.points,
            budget,
        )?);
    }
    if rng.chance_above(0.5) {
        hair.extend(generate_hair_strands(
            rng,
            HairVariant::Swept,
            &contour.points,
            counts[2] as usize * 3 + 10,
        )?);
    }
    if rng.chance_above(0.5) {
        hair.extend(generate_hair_strands(
            rng,
            HairVariant::Parted,
            &contour.points,
            counts[3] as usize * 3 + 10,
        )?);
    }

    let right_nose_center = Point::new(
        rng.uniform(width / 18.0, width / 12.0),
        rng.uniform(0.0, height / 5.0),
    );
    let left_nose_center_x = rng.uniform(-width / 18.0, -width / 12.0);
    let left_nose_low = rng.uniform(0.0, height / 5.0) - height / 30.0;
    let left_nose_high = rng.uniform(0.0, height / 5.0) + height / 20.0;
    let left_nose_center = Point::new(
        left_nose_center_x,
        rng.uniform(left_nose_low, left_nose_high),
    );

    let hair_color = if rng.chance_above(0.1) {
        HairColor::Solid((rng.unit() * 10.0) as usize)
    } else {
        HairColor::Dyed {
            offset_percent: rng.uniform(0.0, 100.0),
        }
    };

    let mouth_variant = MouthVariant::pick(rng);
    let mouth = generate_mouth_points(rng, mouth_variant, height, width)?;

    debug!(
        "composed face {width:.1}x{height:.1}, {} hair strands, {mouth_variant:?} mouth",
        hair.len()
    );

    Ok(GeneratedFace {
        face_scale,
        sleepless,
        contour,
        eyes,
        distance_between_eyes,
        eye_height_offset,
        left_eye_offset,
        right_eye_offset,
        left_pupil_shift,
        right_pupil_shift,
        hair,
        hair_color,
        left_nose_center,
        right_nose_center,
        mouth_variant,
        mouth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{EntropyRng, MidpointRng};
    use crate::core::settings::FACE_SEGMENT_POINTS;

    #[test]
    fn seeded_generation_replays_exactly() {
        let a = generate_avatar(&mut EntropyRng::seeded(97)).unwrap();
        let b = generate_avatar(&mut EntropyRng::seeded(97)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_face_has_consistent_structure() {
        let mut rng = EntropyRng::seeded(101);
        for _ in 0..5 {
            let face = generate_avatar(&mut rng).unwrap();
            assert_eq!(
                face.contour.points.len(),
                4 * FACE_SEGMENT_POINTS + 2
            );
            assert!(face.face_scale >= 1.5 && face.face_scale < 2.1);
            assert!(face.distance_between_eyes > 0.0);
            assert!(face.eye_height_offset > 0.0);
            assert!(face.right_nose_center.x > 0.0);
            assert!(face.left_nose_center.x < 0.0);
            assert!(!face.mouth.is_empty());
        }
    }

    // Golden regression: with every draw pinned to its interval midpoint the
    // whole face is a fixed value. The structural facts below are derived
    // from the midpoint stream by hand; if any of them move, the draw order
    // changed.
    #[test]
    fn midpoint_face_is_the_golden_face() {
        let face = generate_avatar(&mut MidpointRng).unwrap();
        let again = generate_avatar(&mut MidpointRng).unwrap();
        assert_eq!(face, again, "midpoint generation must be bit-stable");

        assert_eq!(face.face_scale, 1.8);
        assert!(!face.sleepless);
        assert_eq!(face.contour.points.len(), 402);
        assert_eq!(face.contour.center, Point::ORIGIN);

        // unit() = 0.5 runs the woven and wisp strategies and skips the
        // other two. Both strand budgets derive from floor(25) draws:
        // 25 + 10 woven strands of 20 points, ceil(25/1.5 + 10) = 27 wisp
        // strands of 21 points.
        assert_eq!(face.hair.len(), 35 + 27);
        assert!(face.hair[..35].iter().all(|s| s.len() == 20));
        assert!(face.hair[35..].iter().all(|s| s.len() == 21));

        // floor(0.5 * 3) picks the tucked variant.
        assert_eq!(face.mouth_variant, MouthVariant::TuckedCurve);
        assert_eq!(face.mouth.len(), 200);

        // Midpoint pupil blend reads sample 50 of each lid at lerp 0.5.
        let mid_left = Point::new(
            (face.eyes.left.upper[50].x + face.eyes.left.lower[50].x) / 2.0,
            (face.eyes.left.upper[50].y + face.eyes.left.lower[50].y) / 2.0,
        );
        assert_eq!(face.left_pupil_shift, mid_left);

        assert_eq!(face.hair_color, HairColor::Solid(5));
    }
}
