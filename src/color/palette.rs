use crate::color::Rgb;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Colors cycled through by short presses in the static mode
pub const STATIC_PALETTE: [Rgb; 6] = [
    Rgb { r: 255, g: 0, b: 0 },     // Red
    Rgb { r: 255, g: 255, b: 0 },   // Yellow
    Rgb { r: 0, g: 255, b: 0 },     // Green
    Rgb { r: 0, g: 255, b: 255 },   // Cyan
    Rgb { r: 0, g: 0, b: 255 },     // Blue
    Rgb { r: 255, g: 0, b: 255 },   // Magenta
];
