// Settings ///////////////////////////////////////////////////////////////////
// Fixed tunables for the face generators and the SVG output.

// Contour Sampling ///////////////////////////////////////////////////////////

/// Samples per quadrant for the face outline; a full contour is 4x this
pub const FACE_SEGMENT_POINTS: usize = 100;
/// Samples per quadrant for the small egg used by the pressed-lips mouth
pub const MOUTH_EGG_SEGMENTS: usize = 50;

// Eyelids ////////////////////////////////////////////////////////////////////

/// Samples along each eyelid curve
pub const EYELID_SAMPLES: usize = 100;
/// Samples near each lid corner that get blended toward the control curves
pub const EYELID_BLEND_SAMPLES: usize = 75;
/// Sample range of each lid kept for the pupil clip contour
pub const EYE_CLIP_START: usize = 10;
pub const EYE_CLIP_END: usize = 90;

// Bezier Evaluation //////////////////////////////////////////////////////////

/// Upper bound on control points accepted by the Bernstein evaluator.
/// Hair strands fit at most ~38 control points; the bound keeps the
/// factorial-based binomial coefficients far away from f64 overflow.
pub const MAX_BEZIER_CONTROL_POINTS: usize = 64;

// Hair ///////////////////////////////////////////////////////////////////////

/// Strands closer than this (previous end to next start) may be merged
pub const HAIR_MERGE_DISTANCE: f64 = 100.0;

// SVG Output /////////////////////////////////////////////////////////////////

/// Rendered document edge length in pixels
pub const SVG_SIZE: u32 = 500;
/// View box (min-x, min-y, width, height) in face-local units
pub const SVG_VIEW_BOX: (f64, f64, f64, f64) = (-100.0, -100.0, 200.0, 200.0);
