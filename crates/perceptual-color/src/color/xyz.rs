//! CIE 1931 XYZ color type

use super::rgb::Rgb;

/// CIE XYZ tristimulus values under the D65 illuminant (2° observer).
///
/// For colors converted from sRGB, `y` is relative luminance with white at
/// roughly 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Undo the sRGB transfer curve for one 8-bit channel.
#[inline]
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;

    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// Convert an opaque sRGB color to XYZ (D65).
///
/// ```
/// use perceptual_color::{rgb_to_xyz, Rgb, Xyz};
/// assert_eq!(rgb_to_xyz(Rgb::BLACK), Xyz::new(0.0, 0.0, 0.0));
/// ```
pub fn rgb_to_xyz(color: Rgb) -> Xyz {
    let r = linearize(color.r);
    let g = linearize(color.g);
    let b = linearize(color.b);

    Xyz {
        x: r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
        y: r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
        z: r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        rgb_to_xyz(rgb)
    }
}
