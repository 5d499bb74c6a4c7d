use super::*;
use crate::input::classifier::ClassifyError;
use std::path::PathBuf;

struct FixedClassifier {
    fail: bool,
}

impl Classifier for FixedClassifier {
    fn classify(
        &self,
        image: &Path,
        _candidates: &CandidateLabelSet,
    ) -> Result<RawClassification, ClassifyError> {
        if self.fail {
            return Err(ClassifyError::Unavailable(image.to_path_buf()));
        }
        Ok([("dog", 0.9)].into_iter().collect())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[test]
fn test_success_passes_labels_through() {
    let image = PathBuf::from("a.jpg");
    let out = run_stage1(
        &FixedClassifier { fail: false },
        &image,
        &CandidateLabelSet::default(),
    );
    assert!(!out.degraded);
    assert_eq!(out.raw.labels.len(), 1);
}

#[test]
fn test_failure_degrades_to_empty() {
    let image = PathBuf::from("a.jpg");
    let out = run_stage1(
        &FixedClassifier { fail: true },
        &image,
        &CandidateLabelSet::default(),
    );
    assert!(out.degraded);
    assert!(out.raw.labels.is_empty());
}
