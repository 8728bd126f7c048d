//! Palette complexity classification.
//!
//! Counts the perceptually distinct colors of a decoded image. Images with
//! only a handful of distinct colors (logos, icons, flat illustrations) are
//! better served as SVG; once the count passes the color limit the image is
//! treated as photographic and the scan stops.

use image::RgbaImage;
use perceptual_color::{color_diff, color_diff_category, Rgb, Rgba};
use serde::Serialize;

/// Default number of distinct colors an icon-like image may have.
pub const DEFAULT_COLOR_LIMIT: usize = 128;

/// Default contrast applied before counting. Stretching contrast pulls
/// near-identical tones apart or merges them into the clipped extremes.
pub const DEFAULT_CONTRAST: f64 = 0.6;

/// Options for [`classify_palette`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteOptions {
    /// Maximum number of distinct colors before the image counts as photographic
    pub color_limit: usize,
    /// Contrast stretch in `-1.0..1.0`, or `None` to count raw colors
    pub contrast: Option<f64>,
    /// Opaque background translucent pixels are flattened onto
    pub background: Rgb,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            color_limit: DEFAULT_COLOR_LIMIT,
            contrast: Some(DEFAULT_CONTRAST),
            background: Rgb::WHITE,
        }
    }
}

/// Raster-vs-vector verdict for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteVerdict {
    /// More distinct colors than the limit; keep as raster
    Photographic,
    /// Few distinct colors; consider converting to SVG
    IconLike,
}

/// Result of a palette scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteReport {
    pub verdict: PaletteVerdict,
    /// Representatives collected before the scan ended
    pub distinct_colors: usize,
    /// Pixels visited, including skipped transparent ones
    pub pixels_scanned: u64,
}

/// What happened to a color offered to a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Close enough to an existing representative
    Duplicate,
    /// Added as a new representative
    Added,
    /// Added, and the palette now holds more than its limit
    LimitExceeded,
}

/// Capped set of perceptually distinct representative colors.
#[derive(Debug, Clone)]
pub struct Palette {
    representatives: Vec<Rgba>,
    limit: usize,
    background: Rgb,
}

impl Palette {
    pub fn new(limit: usize, background: Rgb) -> Self {
        Self {
            representatives: Vec::with_capacity(limit.saturating_add(1).min(1024)),
            limit,
            background,
        }
    }

    /// Offer a color. It is a duplicate when some representative is not or
    /// hardly perceptibly different from it.
    pub fn observe(&mut self, color: Rgba) -> Observation {
        let duplicate = self.representatives.iter().any(|rep| {
            color_diff_category(color_diff(*rep, color, self.background)).is_duplicate()
        });

        if duplicate {
            return Observation::Duplicate;
        }

        self.representatives.push(color);

        if self.is_exceeded() {
            Observation::LimitExceeded
        } else {
            Observation::Added
        }
    }

    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    pub fn is_exceeded(&self) -> bool {
        self.representatives.len() > self.limit
    }

    pub fn representatives(&self) -> &[Rgba] {
        &self.representatives
    }
}

/// Multiplier for a contrast value in `-1.0..1.0`.
fn contrast_factor(contrast: f64) -> f64 {
    (contrast + 1.0) / (1.0 - contrast)
}

/// Scale a channel around the midpoint, clamped to `0..=255`.
fn stretch(channel: u8, factor: f64) -> u8 {
    (factor * (channel as f64 - 127.0) + 127.0)
        .floor()
        .clamp(0.0, 255.0) as u8
}

/// Classify an image as photographic or icon-like by counting its
/// perceptually distinct colors.
///
/// Pixels are visited in raster order. Fully transparent pixels are skipped.
/// The scan ends at the first color that pushes the palette past
/// `options.color_limit`.
pub fn classify_palette(image: &RgbaImage, options: &PaletteOptions) -> PaletteReport {
    let factor = options.contrast.map(contrast_factor);
    let mut palette = Palette::new(options.color_limit, options.background);
    let mut pixels_scanned = 0u64;

    for pixel in image.pixels() {
        pixels_scanned += 1;

        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }

        let color = match factor {
            Some(f) => Rgba::from_u8(stretch(r, f), stretch(g, f), stretch(b, f), a),
            None => Rgba::from_u8(r, g, b, a),
        };

        if palette.observe(color) == Observation::LimitExceeded {
            break;
        }
    }

    let verdict = if palette.is_exceeded() {
        PaletteVerdict::Photographic
    } else {
        PaletteVerdict::IconLike
    };

    tracing::trace!(
        distinct_colors = palette.len(),
        pixels_scanned,
        ?verdict,
        "Palette scan finished"
    );

    PaletteReport {
        verdict,
        distinct_colors: palette.len(),
        pixels_scanned,
    }
}
