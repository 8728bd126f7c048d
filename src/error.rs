use std::path::PathBuf;

use perceptual_color::ParseColorError;
use thiserror::Error;

/// Failure while classifying or preparing a single image.
///
/// The batch services never let one of these escape an image boundary; they
/// are turned into per-image records instead.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid background color: {0}")]
    InvalidBackground(#[from] ParseColorError),

    #[error("Contrast must be within -1.0..1.0 (exclusive), got {0}")]
    InvalidContrast(f64),

    #[error("Progressive scale must be within 0.0..=1.0 (exclusive of 0), got {0}")]
    InvalidScale(f64),

    #[error("Blur sigma must be positive, got {0}")]
    InvalidBlur(f32),

    #[error("Palette color limit must be at least 1")]
    ZeroColorLimit,
}
