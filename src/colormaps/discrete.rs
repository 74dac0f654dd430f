//! Discrete magnitude palette.
//!
//! The effective coloring path: each recognized magnitude code maps to one
//! fixed RGBA tuple sampled from the YlOrBr ramp. Matching is exact
//! floating-point equality; anything else silently takes the default color
//! (the code-5 tuple). An unrecognized code is not an error.

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub [f64; 4]);

impl Rgba {
    /// Scale each channel to 0-255 for deck.gl
    pub fn to_rgba255(self) -> [u8; 4] {
        let [r, g, b, a] = self.0;
        [
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            (a * 255.0).round() as u8,
        ]
    }
}

/// Fallback color for unrecognized magnitude codes, identical to code 5.
const DEFAULT_COLOR: Rgba = Rgba([1.0, 0.8196078431372549, 0.011764705882352941, 1.0]);

/// Recognized magnitude codes and their colors.
const MAGNITUDE_COLORS: [(f64, Rgba); 6] = [
    (5.0, Rgba([1.0, 0.8196078431372549, 0.011764705882352941, 1.0])),
    (
        5.1,
        Rgba([0.996078431372549, 0.7764705882352941, 0.12941176470588237, 1.0]),
    ),
    (
        5.2,
        Rgba([0.996078431372549, 0.7333333333333333, 0.24705882352941178, 1.0]),
    ),
    (
        6.0,
        Rgba([0.9921568627450981, 0.6901960784313725, 0.3607843137254902, 1.0]),
    ),
    (
        7.0,
        Rgba([0.9490196078431372, 0.5098039215686274, 0.30196078431372547, 1.0]),
    ),
    (
        8.0,
        Rgba([0.8941176470588236, 0.30196078431372547, 0.20392156862745098, 1.0]),
    ),
];

/// Map a magnitude code to its fixed RGBA color
#[allow(clippy::float_cmp)]
pub fn magnitude_color(value: f64) -> Rgba {
    // Matching is exact on purpose: near-miss codes take the default
    for (code, color) in MAGNITUDE_COLORS {
        if value == code {
            return color;
        }
    }
    DEFAULT_COLOR
}
