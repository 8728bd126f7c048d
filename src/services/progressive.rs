//! Progressive placeholder generation.
//!
//! Writes a small blurred copy of each source image next to it, named
//! `<stem><marker>.<ext>`, for pages that show a placeholder while the full
//! image loads.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use image::imageops::FilterType;
use serde::Serialize;

use crate::error::AdvisorError;
use crate::models::ProgressiveConfig;

/// Result of preparing one placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum PreparedOutcome {
    Written {
        output: PathBuf,
        width: u32,
        height: u32,
    },
    Error {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedImage {
    pub source: PathBuf,
    #[serde(flatten)]
    pub outcome: PreparedOutcome,
}

impl PreparedImage {
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, PreparedOutcome::Error { .. })
    }
}

/// Placeholder path for `source`: same directory, marker appended to the stem.
pub fn placeholder_path(source: &Path, marker: &str) -> Result<PathBuf, AdvisorError> {
    let invalid = || AdvisorError::InvalidPath(source.to_path_buf());

    let stem = source.file_stem().ok_or_else(invalid)?.to_string_lossy();
    let ext = source.extension().ok_or_else(invalid)?.to_string_lossy();

    Ok(source.with_file_name(format!("{stem}{marker}.{ext}")))
}

/// Target size after scaling, never below 1x1.
fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let scale_side = |side: u32| ((side as f64 * scale).round() as u32).max(1);
    (scale_side(width), scale_side(height))
}

pub struct ProgressivePreparer {
    config: ProgressiveConfig,
    marker: String,
    cancel: Option<Arc<AtomicBool>>,
}

impl ProgressivePreparer {
    pub fn new(config: ProgressiveConfig, marker: impl Into<String>) -> Self {
        Self {
            config,
            marker: marker.into(),
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Scale, blur and save the placeholder for a single image.
    pub fn prepare_one(&self, source: &Path) -> Result<PreparedOutcome, AdvisorError> {
        let output = placeholder_path(source, &self.marker)?;

        let image = image::open(source).map_err(|e| match e {
            image::ImageError::IoError(source_err) => AdvisorError::Io {
                path: source.to_path_buf(),
                source: source_err,
            },
            other => AdvisorError::Decode {
                path: source.to_path_buf(),
                source: other,
            },
        })?;

        let (width, height) =
            scaled_dimensions(image.width(), image.height(), self.config.scale);
        let placeholder = image
            .resize_exact(width, height, FilterType::Triangle)
            .blur(self.config.blur_sigma);

        placeholder
            .save(&output)
            .map_err(|e| AdvisorError::Encode {
                path: output.clone(),
                source: e,
            })?;

        tracing::debug!(
            source = %source.display(),
            output = %output.display(),
            width,
            height,
            "Wrote progressive placeholder"
        );

        Ok(PreparedOutcome::Written {
            output,
            width,
            height,
        })
    }

    /// Prepare placeholders for every image in order, isolating failures.
    pub fn prepare(&self, sources: &[PathBuf]) -> Vec<PreparedImage> {
        let mut prepared = Vec::with_capacity(sources.len());

        for (index, source) in sources.iter().enumerate() {
            if self
                .cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                tracing::warn!(
                    remaining = sources.len() - index,
                    "Preparation cancelled, skipping remaining images"
                );
                break;
            }

            let outcome = self.prepare_one(source).unwrap_or_else(|e| {
                tracing::debug!(source = %source.display(), error = %e, "Placeholder failed");
                PreparedOutcome::Error {
                    error: e.to_string(),
                }
            });

            prepared.push(PreparedImage {
                source: source.clone(),
                outcome,
            });
        }

        prepared
    }
}
