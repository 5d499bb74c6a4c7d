use crate::model::params::ScoringParams;
use crate::model::scores::{CategoryScore, GroupedScore};

/// Running per-category sums for one user, in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct UserAccumulator {
    sums: Vec<CategoryScore>,
}

impl UserAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, grouped: &GroupedScore) {
        for entry in grouped.iter() {
            match self.sums.iter_mut().find(|s| s.category == entry.category) {
                Some(sum) => sum.score += entry.score,
                None => self.sums.push(entry.clone()),
            }
        }
    }

    /// Averages over `n_images` (every image, matched or not) and keeps the
    /// best `params.top_n`, rounded. Equal averages keep first-appearance order.
    pub fn finish(self, n_images: usize, params: &ScoringParams) -> Vec<CategoryScore> {
        if n_images == 0 {
            return Vec::new();
        }
        let n = n_images as f64;
        let mut averaged: Vec<CategoryScore> = self
            .sums
            .into_iter()
            .map(|s| CategoryScore {
                category: s.category,
                score: s.score / n,
            })
            .collect();
        averaged.sort_by(|a, b| b.score.total_cmp(&a.score));
        averaged.truncate(params.top_n);
        for entry in &mut averaged {
            entry.score = round_to(entry.score, params.round_decimals);
        }
        averaged
    }
}

pub fn run_stage3(
    grouped: &[GroupedScore],
    n_images: usize,
    params: &ScoringParams,
) -> Vec<CategoryScore> {
    let mut acc = UserAccumulator::new();
    for g in grouped {
        acc.add(g);
    }
    acc.finish(n_images, params)
}

/// Rounds from the exact binary value, so a stored 0.12349999... stays below
/// the half-way point instead of being scaled up onto it first.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
