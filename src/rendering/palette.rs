// Color tables for the rendered face. The first ten hair entries are the
// natural shades the solid pick draws from; the rest only show up in dye
// gradients.

/// Hair stroke colors. Indexes 0..10 are the natural section.
pub const HAIR_COLORS: &[&str] = &[
    "rgb(0, 0, 0)",
    "rgb(44, 34, 43)",
    "rgb(80, 68, 68)",
    "rgb(167, 133, 106)",
    "rgb(220, 208, 186)",
    "rgb(233, 236, 239)",
    "rgb(165, 42, 42)",
    "rgb(145, 85, 61)",
    "rgb(128, 128, 128)",
    "rgb(185, 55, 55)",
    "rgb(255, 192, 203)",
    "rgb(255, 105, 180)",
    "rgb(230, 230, 250)",
    "rgb(64, 224, 208)",
    "rgb(0, 191, 255)",
    "rgb(148, 0, 211)",
    "rgb(50, 205, 50)",
    "rgb(255, 165, 0)",
    "rgb(220, 20, 60)",
    "rgb(192, 192, 192)",
    "rgb(255, 215, 0)",
    "rgb(255, 255, 255)",
    "rgb(124, 252, 0)",
    "rgb(127, 255, 0)",
    "rgb(0, 255, 127)",
    "rgb(72, 209, 204)",
    "rgb(0, 255, 255)",
    "rgb(0, 206, 209)",
    "rgb(32, 178, 170)",
    "rgb(95, 158, 160)",
    "rgb(70, 130, 180)",
    "rgb(176, 196, 222)",
    "rgb(30, 144, 255)",
    "rgb(135, 206, 235)",
    "rgb(0, 0, 139)",
    "rgb(138, 43, 226)",
    "rgb(75, 0, 130)",
    "rgb(139, 0, 139)",
    "rgb(153, 50, 204)",
    "rgb(186, 85, 211)",
    "rgb(218, 112, 214)",
    "rgb(221, 160, 221)",
    "rgb(238, 130, 238)",
    "rgb(255, 0, 255)",
    "rgb(216, 191, 216)",
    "rgb(255, 20, 147)",
    "rgb(255, 69, 0)",
    "rgb(255, 140, 0)",
    "rgb(255, 165, 0)",
    "rgb(250, 128, 114)",
    "rgb(233, 150, 122)",
    "rgb(240, 128, 128)",
    "rgb(205, 92, 92)",
    "rgb(255, 99, 71)",
    "rgb(255, 160, 122)",
    "rgb(220, 20, 60)",
    "rgb(139, 0, 0)",
    "rgb(178, 34, 34)",
    "rgb(250, 235, 215)",
    "rgb(255, 239, 213)",
    "rgb(255, 235, 205)",
    "rgb(255, 222, 173)",
    "rgb(245, 245, 220)",
    "rgb(255, 228, 196)",
    "rgb(255, 218, 185)",
    "rgb(244, 164, 96)",
    "rgb(210, 180, 140)",
    "rgb(222, 184, 135)",
    "rgb(250, 250, 210)",
    "rgb(255, 250, 250)",
    "rgb(240, 255, 255)",
    "rgb(240, 255, 240)",
    "rgb(245, 245, 245)",
    "rgb(245, 255, 250)",
    "rgb(240, 248, 255)",
    "rgb(240, 248, 255)",
    "rgb(248, 248, 255)",
    "rgb(255, 250, 240)",
    "rgb(253, 245, 230)",
];

/// Backdrop fills behind the face.
pub const BACKGROUND_COLORS: &[&str] = &[
    "rgb(245, 245, 220)",
    "rgb(176, 224, 230)",
    "rgb(211, 211, 211)",
    "rgb(152, 251, 152)",
    "rgb(255, 253, 208)",
    "rgb(230, 230, 250)",
    "rgb(188, 143, 143)",
    "rgb(135, 206, 235)",
    "rgb(245, 255, 250)",
    "rgb(245, 222, 179)",
    "rgb(47, 79, 79)",
    "rgb(72, 61, 139)",
    "rgb(60, 20, 20)",
    "rgb(25, 25, 112)",
    "rgb(139, 0, 0)",
    "rgb(85, 107, 47)",
    "rgb(128, 0, 128)",
    "rgb(0, 100, 0)",
    "rgb(0, 0, 139)",
    "rgb(105, 105, 105)",
    "rgb(240, 128, 128)",
    "rgb(255, 160, 122)",
    "rgb(255, 218, 185)",
    "rgb(255, 228, 196)",
    "rgb(255, 222, 173)",
    "rgb(255, 250, 205)",
    "rgb(250, 250, 210)",
    "rgb(255, 239, 213)",
    "rgb(253, 245, 230)",
    "rgb(250, 240, 230)",
];

/// Skin fill for the face outline.
pub const SKIN_COLOR: &str = "#ffc9a9";

/// Mouth fill.
pub const MOUTH_COLOR: &str = "rgb(215,127,140)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_their_documented_sizes() {
        assert_eq!(HAIR_COLORS.len(), 79);
        assert_eq!(BACKGROUND_COLORS.len(), 30);
        assert!(HAIR_COLORS.len() >= 10, "solid picks index the first ten");
    }
}
