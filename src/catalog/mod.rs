pub mod defs;
pub mod loader;
pub mod mapping;

use std::collections::BTreeSet;

pub use loader::load_catalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in category source: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid category format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub labels: Vec<String>,
    /// Trimmed, lowercased copies of `labels`, same order.
    pub labels_norm: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, labels: Vec<String>) -> Self {
        let labels_norm = labels.iter().map(|l| mapping::normalize_label(l)).collect();
        Self {
            name: name.into(),
            labels,
            labels_norm,
        }
    }
}

/// Category definitions in the order they were declared.
///
/// Matching walks categories in this order and the first hit wins, so the
/// order resolves labels that belong to several categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMapping {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateLabelSet {
    pub labels: BTreeSet<String>,
}

pub fn flatten(mapping: &CategoryMapping) -> CandidateLabelSet {
    let mut labels = BTreeSet::new();
    for category in &mapping.categories {
        for label in &category.labels {
            labels.insert(label.clone());
        }
    }
    CandidateLabelSet { labels }
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
