/// One (label, confidence) pair as reported by a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub confidence: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Raw classifier output for a single image. Unordered, may repeat labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawClassification {
    pub labels: Vec<LabelScore>,
}

impl RawClassification {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RawClassification {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(label, confidence)| LabelScore::new(label, confidence))
                .collect(),
        }
    }
}
