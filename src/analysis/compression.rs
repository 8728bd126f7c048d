use serde::{Deserialize, Serialize};
use std::fmt;

/// How well an image's encoding is compressed relative to its resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionLevel {
    /// Few bytes per pixel; already well compressed
    #[serde(rename = "high-compression")]
    High,
    /// Worth compressing further
    #[serde(rename = "medium-compression")]
    Medium,
    /// Oversized or barely compressed
    #[serde(rename = "low-compression")]
    Low,
    /// Too small for a compression advisory to matter
    None,
}

impl CompressionLevel {
    /// Whether this level already warrants a compression advisory.
    pub fn is_actionable(self) -> bool {
        matches!(self, CompressionLevel::Low | CompressionLevel::Medium)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompressionLevel::High => "high-compression",
            CompressionLevel::Medium => "medium-compression",
            CompressionLevel::Low => "low-compression",
            CompressionLevel::None => "none",
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte-size and bytes-per-pixel boundaries for [`classify_compression`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionThresholds {
    /// Files above this many bytes are `Low` regardless of resolution
    #[serde(default = "default_oversized_bytes")]
    pub oversized_bytes: u64,

    /// Below this many bytes per pixel the image is `High`
    #[serde(default = "default_high_max_bytes_per_pixel")]
    pub high_max_bytes_per_pixel: f64,

    /// Below this many bytes per pixel the image is `Medium`
    #[serde(default = "default_medium_max_bytes_per_pixel")]
    pub medium_max_bytes_per_pixel: f64,

    /// Dense files larger than this are `Low`; smaller ones get no advisory
    #[serde(default = "default_low_min_bytes")]
    pub low_min_bytes: u64,
}

fn default_oversized_bytes() -> u64 {
    1_500_000
}

fn default_high_max_bytes_per_pixel() -> f64 {
    0.5
}

fn default_medium_max_bytes_per_pixel() -> f64 {
    1.7
}

fn default_low_min_bytes() -> u64 {
    50_000
}

impl Default for CompressionThresholds {
    fn default() -> Self {
        Self {
            oversized_bytes: default_oversized_bytes(),
            high_max_bytes_per_pixel: default_high_max_bytes_per_pixel(),
            medium_max_bytes_per_pixel: default_medium_max_bytes_per_pixel(),
            low_min_bytes: default_low_min_bytes(),
        }
    }
}

/// Bucket an image's encoding efficiency from its byte size and resolution.
///
/// A zero-pixel image has an infinite (or NaN, for an empty file) density and
/// falls through to the size floor.
pub fn classify_compression(
    file_size: u64,
    width: u32,
    height: u32,
    thresholds: &CompressionThresholds,
) -> CompressionLevel {
    if file_size > thresholds.oversized_bytes {
        return CompressionLevel::Low;
    }

    let pixels = width as f64 * height as f64;
    let bytes_per_pixel = file_size as f64 / pixels;

    if bytes_per_pixel < thresholds.high_max_bytes_per_pixel {
        CompressionLevel::High
    } else if bytes_per_pixel < thresholds.medium_max_bytes_per_pixel {
        CompressionLevel::Medium
    } else if file_size > thresholds.low_min_bytes {
        CompressionLevel::Low
    } else {
        CompressionLevel::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(file_size: u64, width: u32, height: u32) -> CompressionLevel {
        classify_compression(file_size, width, height, &CompressionThresholds::default())
    }

    #[test]
    fn test_oversized_file_is_low_at_any_resolution() {
        assert_eq!(classify(2_000_000, 10_000, 10_000), CompressionLevel::Low);
        assert_eq!(classify(2_000_000, 1, 1), CompressionLevel::Low);
        assert_eq!(classify(1_500_001, 8000, 8000), CompressionLevel::Low);
    }

    #[test]
    fn test_exactly_oversized_limit_uses_density() {
        // 1_500_000 bytes over 5_000_000 px = 0.3 B/px
        assert_eq!(classify(1_500_000, 2500, 2000), CompressionLevel::High);
    }

    #[test]
    fn test_density_table() {
        // 0.3 B/px
        assert_eq!(classify(30_000, 1000, 100), CompressionLevel::High);
        // 1.0 B/px
        assert_eq!(classify(100_000, 1000, 100), CompressionLevel::Medium);
        // 2.0 B/px, above the size floor
        assert_eq!(classify(60_000, 300, 100), CompressionLevel::Low);
        // 2.0 B/px, below the size floor
        assert_eq!(classify(40_000, 200, 100), CompressionLevel::None);
    }

    #[test]
    fn test_density_boundaries_are_exclusive() {
        // exactly 0.5 B/px is not High
        assert_eq!(classify(50_000, 1000, 100), CompressionLevel::Medium);
        // exactly 1.7 B/px is not Medium; 170_000 > 50_000 so Low
        assert_eq!(classify(170_000, 1000, 100), CompressionLevel::Low);
        // dense but exactly at the floor
        assert_eq!(classify(50_000, 100, 100), CompressionLevel::None);
    }

    #[test]
    fn test_zero_pixel_image_falls_back_to_size_floor() {
        assert_eq!(classify(60_000, 0, 0), CompressionLevel::Low);
        assert_eq!(classify(1_000, 0, 10), CompressionLevel::None);
        assert_eq!(classify(0, 0, 0), CompressionLevel::None);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = CompressionThresholds {
            oversized_bytes: 100_000,
            ..Default::default()
        };
        assert_eq!(
            classify_compression(150_000, 10_000, 10_000, &strict),
            CompressionLevel::Low
        );
    }

    #[test]
    fn test_actionable_levels() {
        assert!(CompressionLevel::Low.is_actionable());
        assert!(CompressionLevel::Medium.is_actionable());
        assert!(!CompressionLevel::High.is_actionable());
        assert!(!CompressionLevel::None.is_actionable());
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&CompressionLevel::Medium).unwrap(),
            "\"medium-compression\""
        );
        assert_eq!(serde_json::to_string(&CompressionLevel::None).unwrap(), "\"none\"");
        assert_eq!(CompressionLevel::Low.to_string(), "low-compression");
    }
}
