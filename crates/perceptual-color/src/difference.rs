//! Perceptual color difference (CIE76 ΔE) and its categories

use std::fmt;

use crate::color::{rgba_to_lab, Rgb, Rgba};

/// How different two colors look, bucketed by ΔE.
///
/// Variants are ordered from most similar to least similar, so categories can
/// be compared with `<`/`>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifferenceCategory {
    /// ΔE <= 1.0
    NotPerceptible,
    /// 1.0 < ΔE < 2.0, visible only through close observation
    HardlyPerceptible,
    /// 2.0 <= ΔE < 10.0, visible at a glance
    Perceptible,
    /// 10.0 <= ΔE < 49.0
    MoreSimilarThanOpposite,
    /// 49.0 <= ΔE < 100.0
    MoreOppositeThanSimilar,
    /// ΔE == 100.0, the distance between black and white
    ExactOpposite,
    /// ΔE > 100.0, outside the range the thresholds assume
    OutOfBounds,
}

impl DifferenceCategory {
    /// Whether two colors in this category count as the same color for
    /// palette deduplication.
    #[inline]
    pub fn is_duplicate(self) -> bool {
        matches!(
            self,
            DifferenceCategory::NotPerceptible | DifferenceCategory::HardlyPerceptible
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifferenceCategory::NotPerceptible => "difference-not-perceptible",
            DifferenceCategory::HardlyPerceptible => "difference-hardly-perceptible",
            DifferenceCategory::Perceptible => "difference-perceptible",
            DifferenceCategory::MoreSimilarThanOpposite => "colors-more-similar-than-opposite",
            DifferenceCategory::MoreOppositeThanSimilar => "colors-more-opposite-than-similar",
            DifferenceCategory::ExactOpposite => "colors-exact-opposite",
            DifferenceCategory::OutOfBounds => "difference-out-of-bounds",
        }
    }
}

impl fmt::Display for DifferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CIE76 ΔE between two (possibly translucent) colors, both flattened onto
/// `background` first.
///
/// Symmetric in `color1`/`color2`. Opaque black vs opaque white is exactly
/// 100.0 on any background.
pub fn color_diff(color1: Rgba, color2: Rgba, background: Rgb) -> f64 {
    let lab1 = rgba_to_lab(color1, background);
    let lab2 = rgba_to_lab(color2, background);

    lab1.delta_e(lab2)
}

/// Bucket a ΔE value into a [`DifferenceCategory`].
///
/// NaN falls through every comparison and is reported as
/// [`DifferenceCategory::OutOfBounds`].
pub fn color_diff_category(diff: f64) -> DifferenceCategory {
    if diff <= 1.0 {
        DifferenceCategory::NotPerceptible
    } else if diff < 2.0 {
        DifferenceCategory::HardlyPerceptible
    } else if diff < 10.0 {
        DifferenceCategory::Perceptible
    } else if diff < 49.0 {
        DifferenceCategory::MoreSimilarThanOpposite
    } else if diff < 100.0 {
        DifferenceCategory::MoreOppositeThanSimilar
    } else if diff == 100.0 {
        DifferenceCategory::ExactOpposite
    } else {
        DifferenceCategory::OutOfBounds
    }
}
