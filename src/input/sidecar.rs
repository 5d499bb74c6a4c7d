use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::CandidateLabelSet;
use crate::input::classifier::{Classifier, ClassifyError};
use crate::input::open_maybe_gz;
use crate::model::labels::{LabelScore, RawClassification};

const SIDECAR_SUFFIXES: &[&str] = &[".labels.json", ".labels.json.gz"];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SidecarEntry {
    Pair(String, f64),
    Object {
        label: String,
        #[serde(alias = "score")]
        confidence: f64,
    },
}

/// Offline classifier that replays labels stored next to each image.
///
/// `photo.jpg` is answered from `photo.jpg.labels.json` (or `.labels.json.gz`)
/// holding either `[["dog", 0.93], ...]` or `[{"label": "dog", "confidence": 0.93}, ...]`.
#[derive(Debug, Clone, Default)]
pub struct SidecarClassifier;

impl SidecarClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn sidecar_path(image: &Path) -> Option<PathBuf> {
        SIDECAR_SUFFIXES
            .iter()
            .map(|suffix| with_suffix(image, suffix))
            .find(|p| p.is_file())
    }
}

impl Classifier for SidecarClassifier {
    fn classify(
        &self,
        image: &Path,
        _candidates: &CandidateLabelSet,
    ) -> Result<RawClassification, ClassifyError> {
        let path = Self::sidecar_path(image)
            .ok_or_else(|| ClassifyError::Unavailable(image.to_path_buf()))?;
        let mut text = String::new();
        open_maybe_gz(&path)
            .and_then(|mut r| r.read_to_string(&mut text))
            .map_err(|source| ClassifyError::Io {
                path: path.clone(),
                source,
            })?;
        parse_sidecar(&text).map_err(|e| ClassifyError::Malformed {
            path,
            message: e.to_string(),
        })
    }

    fn name(&self) -> &str {
        "sidecar"
    }
}

pub fn parse_sidecar(text: &str) -> Result<RawClassification, serde_json::Error> {
    let entries: Vec<SidecarEntry> = serde_json::from_str(text)?;
    let labels = entries
        .into_iter()
        .map(|entry| {
            let (label, confidence) = match entry {
                SidecarEntry::Pair(label, confidence) => (label, confidence),
                SidecarEntry::Object { label, confidence } => (label, confidence),
            };
            LabelScore::new(label.to_lowercase(), confidence.clamp(0.0, 1.0))
        })
        .collect();
    Ok(RawClassification { labels })
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
