use std::path::{Path, PathBuf};

use crate::catalog::CandidateLabelSet;
use crate::model::labels::RawClassification;

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("no classification available for {0}")]
    Unavailable(PathBuf),
    #[error("IO error while classifying {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed classifier output for {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// The image classification capability the pipeline is handed.
///
/// `candidates` is the flattened category vocabulary; implementations may use
/// it as a hint and are free to return labels outside of it.
pub trait Classifier {
    fn classify(
        &self,
        image: &Path,
        candidates: &CandidateLabelSet,
    ) -> Result<RawClassification, ClassifyError>;

    fn name(&self) -> &str;
}
