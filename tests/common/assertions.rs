//! Assertion helpers for tests.

use optimus_img::analysis::CompressionLevel;
use optimus_img::models::{AdvisoryOutcome, ImageAdvisory};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert the advisory for `path` has the expected outcome
pub fn assert_outcome(advisory: &ImageAdvisory, path: &Path, expected: AdvisoryOutcome) {
    assert_eq!(advisory.path(), path, "Advisories out of order");
    assert_eq!(
        advisory.outcome, expected,
        "Unexpected outcome for {}",
        path.display()
    );
}

/// Assert the advisory is a compression warning at `level`
pub fn assert_compression(advisory: &ImageAdvisory, level: CompressionLevel) {
    assert_eq!(
        advisory.outcome,
        AdvisoryOutcome::CompressionWarning { level },
        "Expected {level} for {}",
        advisory.path().display()
    );
}

/// Assert the advisory is an error record
pub fn assert_failed(advisory: &ImageAdvisory) {
    assert!(
        advisory.is_error(),
        "Expected error record for {}, got {:?}",
        advisory.path().display(),
        advisory.outcome
    );
}
