//! Rendering: turning generated point sequences into an SVG document.

pub mod palette;
pub mod svg_export;
