//! CIE L\*a\*b\* perceptual color space
//!
//! # References
//!
//! CIE 15:2004, "Colorimetry", section 8.2.1.
//! Bruce Lindbloom, "XYZ to Lab" <http://www.brucelindbloom.com/Eqn_XYZ_to_Lab.html>

use super::rgb::{rgba_to_rgb, Rgb, Rgba};
use super::xyz::{rgb_to_xyz, Xyz};

/// Reference white of the D65 illuminant, as produced by [`rgb_to_xyz`] for
/// sRGB white.
pub const D65: Xyz = Xyz {
    x: 0.95047,
    y: 1.0000001,
    z: 1.08883,
};

/// Values at or below this (normalized) take the linear branch.
const EPSILON: f64 = 0.008856;

/// Slope of the linear branch.
const KAPPA: f64 = 903.3;

/// A color in CIE L\*a\*b\* space.
///
/// Euclidean distance between two `Lab` values approximates the perceived
/// difference between the colors (CIE76 ΔE).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green (negative) to red (positive)
/// - `b`: Blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 color difference (ΔE*ab): plain Euclidean distance.
    ///
    /// ```
    /// use perceptual_color::Lab;
    ///
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// assert_eq!(black.delta_e(white), 100.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[inline]
fn compand(channel: f64, white: f64) -> f64 {
    let v = channel / white;

    if v > EPSILON {
        v.powf(1.0 / 3.0)
    } else {
        (KAPPA * v + 16.0) / 116.0
    }
}

/// Convert XYZ (D65) to CIE L\*a\*b\*.
pub fn xyz_to_lab(color: Xyz) -> Lab {
    let fx = compand(color.x, D65.x);
    let fy = compand(color.y, D65.y);
    let fz = compand(color.z, D65.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        xyz_to_lab(xyz)
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        xyz_to_lab(rgb_to_xyz(rgb))
    }
}

/// Flatten `foreground` onto `background` and convert the result to Lab.
pub fn rgba_to_lab(foreground: Rgba, background: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgba_to_rgb(background, foreground)))
}
