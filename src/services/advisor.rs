use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::analysis::{
    classify_compression, classify_palette, CompressionThresholds, PaletteOptions, PaletteVerdict,
};
use crate::error::{AdvisorError, ConfigError};
use crate::models::{AdvisoryOutcome, AppConfig, ImageAdvisory};
use crate::services::raster::{FileMetadata, RasterDecoder};

/// Classifier settings used by the [`Advisor`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdvisorOptions {
    pub thresholds: CompressionThresholds,
    pub palette: PaletteOptions,
}

impl AdvisorOptions {
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            thresholds: config.compression,
            palette: config.palette_options()?,
        })
    }
}

/// Batch advisor that runs the classifiers over a list of images.
///
/// Images are processed one at a time in input order. Each image yields
/// exactly one [`ImageAdvisory`]; a failing image becomes an error record and
/// never stops the batch.
pub struct Advisor<C> {
    codec: C,
    options: AdvisorOptions,
    cancel: Option<Arc<AtomicBool>>,
}

impl<C> Advisor<C>
where
    C: FileMetadata + RasterDecoder,
{
    pub fn new(codec: C, options: AdvisorOptions) -> Self {
        Self {
            codec,
            options,
            cancel: None,
        }
    }

    /// Stop before the next image once `flag` is set. An image already being
    /// classified runs to completion.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Classify a single image.
    ///
    /// The compression check runs first; when it already calls for
    /// compression the more expensive palette scan is skipped.
    pub fn classify(&self, path: &Path) -> Result<AdvisoryOutcome, AdvisorError> {
        let file_size = self.codec.byte_size(path)?;
        let (width, height) = self.codec.dimensions(path)?;
        let level = classify_compression(file_size, width, height, &self.options.thresholds);

        tracing::debug!(
            path = %path.display(),
            file_size,
            width,
            height,
            %level,
            "Compression classified"
        );

        if level.is_actionable() {
            return Ok(AdvisoryOutcome::CompressionWarning { level });
        }

        let image = self.codec.decode(path)?;
        let report = classify_palette(&image, &self.options.palette);

        tracing::debug!(
            path = %path.display(),
            distinct_colors = report.distinct_colors,
            pixels_scanned = report.pixels_scanned,
            verdict = ?report.verdict,
            "Palette classified"
        );

        Ok(match report.verdict {
            PaletteVerdict::Photographic => AdvisoryOutcome::NoAction,
            PaletteVerdict::IconLike => AdvisoryOutcome::IconSuggestion,
        })
    }

    /// Classify every image in order.
    ///
    /// Returns one advisory per image. If cancellation is observed the
    /// remaining images are not started and the list ends early.
    pub fn analyse(&self, paths: &[PathBuf]) -> Vec<ImageAdvisory> {
        let mut advisories = Vec::with_capacity(paths.len());

        for (index, path) in paths.iter().enumerate() {
            if self.is_cancelled() {
                tracing::warn!(
                    remaining = paths.len() - index,
                    "Analysis cancelled, skipping remaining images"
                );
                break;
            }

            tracing::info!(path = %path.display(), "analysing image ...");

            let advisory = match self.classify(path) {
                Ok(outcome) => ImageAdvisory::new(path.clone(), outcome),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Image failed");
                    ImageAdvisory::failed(path.clone(), e)
                }
            };
            advisories.push(advisory);
        }

        advisories
    }
}

/// Per-outcome counts of a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvisorSummary {
    pub total: usize,
    pub no_action: usize,
    pub compression_warnings: usize,
    pub icon_suggestions: usize,
    pub errors: usize,
}

impl AdvisorSummary {
    pub fn from_advisories(advisories: &[ImageAdvisory]) -> Self {
        advisories
            .iter()
            .fold(Self::default(), |mut summary, advisory| {
                summary.total += 1;
                match advisory.outcome {
                    AdvisoryOutcome::NoAction => summary.no_action += 1,
                    AdvisoryOutcome::CompressionWarning { .. } => {
                        summary.compression_warnings += 1
                    }
                    AdvisoryOutcome::IconSuggestion => summary.icon_suggestions += 1,
                    AdvisoryOutcome::Error { .. } => summary.errors += 1,
                }
                summary
            })
    }
}
