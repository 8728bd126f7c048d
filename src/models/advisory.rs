use crate::analysis::CompressionLevel;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of analysing one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum AdvisoryOutcome {
    /// Well compressed and photographic; nothing to suggest
    NoAction,
    /// The encoding is heavier than it needs to be
    CompressionWarning { level: CompressionLevel },
    /// Few distinct colors; an SVG would serve better
    IconSuggestion,
    /// The image could not be analysed
    Error { error: String },
}

/// One advisory per analysed image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAdvisory {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: AdvisoryOutcome,
}

impl ImageAdvisory {
    pub fn new(path: impl Into<PathBuf>, outcome: AdvisoryOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    pub fn failed(path: impl Into<PathBuf>, error: impl fmt::Display) -> Self {
        Self::new(
            path,
            AdvisoryOutcome::Error {
                error: error.to_string(),
            },
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, AdvisoryOutcome::Error { .. })
    }

    /// Whether the advisory asks the user to do something.
    pub fn is_actionable(&self) -> bool {
        matches!(
            self.outcome,
            AdvisoryOutcome::CompressionWarning { .. } | AdvisoryOutcome::IconSuggestion
        )
    }

    /// Human readable advice for console output.
    pub fn message(&self) -> String {
        let path = self.path.display();

        match &self.outcome {
            AdvisoryOutcome::NoAction => format!("no action needed for {path}"),
            AdvisoryOutcome::CompressionWarning {
                level: CompressionLevel::Medium,
            } => format!(
                "consider further compression of {path} to achieve a quicker webpage load time \
                 (MEDIUM LOAD TIME EFFECT)"
            ),
            AdvisoryOutcome::CompressionWarning { .. } => format!(
                "consider compressing {path} to achieve a quicker webpage load time \
                 (BIG LOAD TIME EFFECT)"
            ),
            AdvisoryOutcome::IconSuggestion => format!(
                "consider converting {path} icon in SVG format for optimised load and display \
                 on different screens"
            ),
            AdvisoryOutcome::Error { error } => format!("failed to analyse {path}: {error}"),
        }
    }
}

impl fmt::Display for ImageAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
