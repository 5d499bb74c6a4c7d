use crate::catalog::CategoryMapping;
use crate::catalog::mapping::{LabelMatch, match_label, normalize_label};
use crate::model::labels::RawClassification;
use crate::model::params::ScoringParams;
use crate::model::scores::{CategoryScore, GroupedScore};

/// Collapses repeated labels (trimmed, case-insensitive) to their highest
/// confidence, then orders them by confidence descending. Ties keep first
/// appearance order.
pub fn dedupe_labels(raw: &RawClassification) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = Vec::with_capacity(raw.labels.len());
    for item in &raw.labels {
        if !item.confidence.is_finite() {
            tracing::debug!(label = %item.label, "dropping label with non-finite confidence");
            continue;
        }
        let norm = normalize_label(&item.label);
        if norm.is_empty() {
            continue;
        }
        match out.iter_mut().find(|(label, _)| *label == norm) {
            Some(existing) => {
                if item.confidence > existing.1 {
                    existing.1 = item.confidence;
                }
            }
            None => out.push((norm, item.confidence)),
        }
    }
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    out
}

/// Weighted mean of one category's scores within an image: the i-th highest
/// score gets weight `decay^i`.
pub fn combine_scores(scores: &[f64], decay: f64) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    if sorted.len() == 1 {
        return Some(sorted[0]);
    }
    let mut weighted_sum = 0.0f64;
    let mut weight_sum = 0.0f64;
    let mut weight = 1.0f64;
    for score in sorted {
        weighted_sum += score * weight;
        weight_sum += weight;
        weight *= decay;
    }
    Some(weighted_sum / weight_sum)
}

pub fn run_stage2(
    raw: &RawClassification,
    mapping: &CategoryMapping,
    params: &ScoringParams,
) -> GroupedScore {
    let labels = dedupe_labels(raw);
    if labels.is_empty() {
        return GroupedScore::empty();
    }

    let mut assigned: Vec<Vec<f64>> = vec![Vec::new(); mapping.categories.len()];
    let mut first_seen: Vec<usize> = Vec::new();

    for (label, score) in &labels {
        let Some(hit) = match_label(label, mapping, params.min_partial_len) else {
            continue;
        };
        let idx = hit.category_index();
        let value = match hit {
            LabelMatch::Exact(_) => *score,
            LabelMatch::Partial(_) => *score * params.partial_match_factor,
        };
        if assigned[idx].is_empty() {
            first_seen.push(idx);
        }
        assigned[idx].push(value);
    }

    let mut entries = Vec::with_capacity(first_seen.len());
    for idx in first_seen {
        if let Some(score) = combine_scores(&assigned[idx], params.rank_decay) {
            entries.push(CategoryScore {
                category: mapping.categories[idx].name.clone(),
                score,
            });
        }
    }

    GroupedScore { entries }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_group.rs"]
mod tests;
