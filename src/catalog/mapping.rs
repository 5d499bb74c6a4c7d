use crate::catalog::CategoryMapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    Exact(usize),
    Partial(usize),
}

impl LabelMatch {
    pub fn category_index(self) -> usize {
        match self {
            LabelMatch::Exact(idx) | LabelMatch::Partial(idx) => idx,
        }
    }
}

pub fn normalize_label(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Resolves an already normalized label to at most one category.
///
/// An exact hit in any category beats every substring hit; within each
/// strategy the first category in definition order wins.
pub fn match_label(
    label_norm: &str,
    mapping: &CategoryMapping,
    min_partial_len: usize,
) -> Option<LabelMatch> {
    if label_norm.is_empty() {
        return None;
    }
    if let Some(idx) = exact_match(label_norm, mapping) {
        return Some(LabelMatch::Exact(idx));
    }
    partial_match(label_norm, mapping, min_partial_len).map(LabelMatch::Partial)
}

fn exact_match(label_norm: &str, mapping: &CategoryMapping) -> Option<usize> {
    mapping
        .categories
        .iter()
        .position(|c| c.labels_norm.iter().any(|l| l == label_norm))
}

fn partial_match(label_norm: &str, mapping: &CategoryMapping, min_len: usize) -> Option<usize> {
    for (idx, category) in mapping.categories.iter().enumerate() {
        for candidate in &category.labels_norm {
            if candidate.chars().count() < min_len {
                continue;
            }
            if label_norm.contains(candidate.as_str()) || candidate.contains(label_norm) {
                return Some(idx);
            }
        }
    }
    None
}
