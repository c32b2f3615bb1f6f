//! scrawl: procedural scribbly cartoon face generation.
//!
//! The generators produce plain point sequences (kurbo points) for a face
//! contour, eyes, mouth and hair strands; `rendering` turns one generated
//! face into a styled SVG document. All randomness flows through an
//! injectable [`core::rng::RandomSource`], so seeded runs replay exactly.

pub mod core;
pub mod generator;
pub mod geometry;
pub mod rendering;
pub mod utils;

pub use crate::core::rng::{EntropyRng, MidpointRng, RandomSource};
pub use crate::generator::avatar::{generate_avatar, GeneratedFace, HairColor};
pub use crate::generator::eyes::{generate_both_eyes, BothEyes, EyePoints};
pub use crate::generator::face::{generate_face_contour, FaceContour};
pub use crate::generator::hair::{generate_hair_strands, HairVariant};
pub use crate::generator::mouth::{generate_mouth_points, MouthVariant};
pub use crate::rendering::svg_export::render_svg;
