#![allow(clippy::excessive_precision)]

//! perceptual-color: CIE L\*a\*b\* colorimetry for image analysis
//!
//! This library converts 8-bit sRGB colors (optionally translucent) into the
//! CIE L\*a\*b\* color space and measures how different two colors look to a
//! human observer.
//!
//! # Quick Start
//!
//! ```
//! use perceptual_color::{color_diff, color_diff_category, DifferenceCategory, Rgb, Rgba};
//!
//! let white = Rgb::new(255, 255, 255);
//! let navy = Rgba::opaque(0, 0, 128);
//! let almost_navy = Rgba::opaque(0, 0, 129);
//!
//! let diff = color_diff(navy, almost_navy, white);
//! assert_eq!(color_diff_category(diff), DifferenceCategory::NotPerceptible);
//! ```
//!
//! # Color Spaces
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Rgba`] | 8-bit sRGB foreground with a `0.0..=1.0` alpha |
//! | [`Rgb`] | Opaque 8-bit sRGB (background or composited result) |
//! | [`Xyz`] | CIE 1931 tristimulus values under D65 / 2° |
//! | [`Lab`] | CIE L\*a\*b\*, perceptually uniform |
//!
//! ## Pipeline
//!
//! ```text
//! Rgba ──(alpha composite over background)──> Rgb
//!   Rgb ──(gamma decode + sRGB matrix)──────> Xyz
//!   Xyz ──(D65 normalize + cube root)───────> Lab
//!   Lab, Lab ──(Euclidean distance)─────────> ΔE (CIE76)
//! ```
//!
//! Translucent colors are always flattened onto an opaque background before
//! conversion, so the same foreground can compare differently against
//! different backgrounds.
//!
//! ## Difference Categories
//!
//! [`color_diff_category`] buckets a ΔE value:
//!
//! | ΔE | Category |
//! |----|----------|
//! | `<= 1` | not perceptible |
//! | `< 2` | hardly perceptible (close observation) |
//! | `< 10` | perceptible at a glance |
//! | `< 49` | more similar than opposite |
//! | `< 100` | more opposite than similar |
//! | `== 100` | exact opposite (black vs white) |
//! | `> 100` | out of bounds |
//!
//! The bucket boundaries assume black vs white is the largest distance.
//! That holds for grays but not for every pair of saturated colors: pure blue
//! vs pure green lands above 100. [`DifferenceCategory::OutOfBounds`] is kept
//! as a heuristic ceiling so callers can see when input falls outside the
//! range the thresholds were tuned for.

pub mod color;
pub mod difference;


pub use color::{
    rgb_to_xyz, rgba_to_lab, rgba_to_rgb, xyz_to_lab, Lab, ParseColorError, Rgb, Rgba, Xyz, D65,
};
pub use difference::{color_diff, color_diff_category, DifferenceCategory};
