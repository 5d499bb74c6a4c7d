use std::path::Path;

use crate::catalog::CandidateLabelSet;
use crate::input::Classifier;
use crate::model::labels::RawClassification;

#[derive(Debug, Clone)]
pub struct ImageOutcome {
    pub raw: RawClassification,
    /// Set when the classifier failed and `raw` was substituted with nothing.
    pub degraded: bool,
}

/// Runs the classifier for one image. A failure never aborts the caller: the
/// image is reported with no labels so it still counts toward the user's
/// image total.
pub fn run_stage1(
    classifier: &dyn Classifier,
    image: &Path,
    candidates: &CandidateLabelSet,
) -> ImageOutcome {
    match classifier.classify(image, candidates) {
        Ok(raw) => {
            tracing::debug!(
                image = %image.display(),
                labels = raw.labels.len(),
                classifier = classifier.name(),
                "classified image"
            );
            ImageOutcome {
                raw,
                degraded: false,
            }
        }
        Err(err) => {
            tracing::warn!(
                image = %image.display(),
                classifier = classifier.name(),
                error = %err,
                "classification failed; image contributes no labels"
            );
            ImageOutcome {
                raw: RawClassification::empty(),
                degraded: true,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_classify.rs"]
mod tests;
