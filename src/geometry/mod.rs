//! Geometric Primitives and Operations

pub mod bezier;
pub mod contour;
