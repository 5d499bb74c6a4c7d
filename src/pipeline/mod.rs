pub mod stage1_classify;
pub mod stage2_group;
pub mod stage3_aggregate;
pub mod stage4_report;

use serde::Serialize;

use crate::catalog::{CatalogError, CategoryMapping, flatten};
use crate::input::{Classifier, ImageSource, InputError};
use crate::model::params::ScoringParams;
use crate::model::scores::UserScoreRow;
use crate::pipeline::stage1_classify::run_stage1;
use crate::pipeline::stage2_group::run_stage2;
use crate::pipeline::stage3_aggregate::run_stage3;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to load categories: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to read images: {0}")]
    Input(#[from] InputError),
    #[error("failed to write reports: {0}")]
    Report(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub users_discovered: usize,
    pub users_processed: usize,
    pub users_skipped_empty: usize,
    pub images_processed: usize,
    pub images_degraded: usize,
}

pub struct PipelineInputs<'a> {
    pub mapping: &'a CategoryMapping,
    pub source: &'a dyn ImageSource,
    pub classifier: &'a dyn Classifier,
    pub params: &'a ScoringParams,
    pub user_filter: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub rows: Vec<UserScoreRow>,
    pub stats: RunStats,
}

/// Scores every selected user and returns their top categories, users in
/// discovery order.
///
/// A requested user that is not discoverable yields an empty output, as does
/// a source with no users; neither is an error.
pub fn run_pipeline(inputs: &PipelineInputs<'_>) -> Result<PipelineOutput, PipelineError> {
    let candidates = flatten(inputs.mapping);
    let users = inputs.source.list_users()?;

    let mut out = PipelineOutput::default();
    out.stats.users_discovered = users.len();

    let selected = match inputs.user_filter {
        Some(wanted) => {
            if users.iter().any(|u| u == wanted) {
                vec![wanted.to_string()]
            } else {
                tracing::warn!(user = %wanted, "requested user not found");
                return Ok(out);
            }
        }
        None => users,
    };

    if selected.is_empty() {
        tracing::warn!("no users found to process");
        return Ok(out);
    }

    for user in &selected {
        let images = inputs.source.list_images(user)?;
        if images.is_empty() {
            tracing::warn!(user = %user, "no images found for user; skipping");
            out.stats.users_skipped_empty += 1;
            continue;
        }
        tracing::info!(user = %user, images = images.len(), "processing user");

        let mut per_image = Vec::with_capacity(images.len());
        for image in &images {
            let outcome = run_stage1(inputs.classifier, image, &candidates);
            if outcome.degraded {
                out.stats.images_degraded += 1;
            }
            let grouped = run_stage2(&outcome.raw, inputs.mapping, inputs.params);
            tracing::debug!(
                image = %image.display(),
                categories = grouped.entries.len(),
                "grouped labels"
            );
            per_image.push(grouped);
            out.stats.images_processed += 1;
        }

        for top in run_stage3(&per_image, images.len(), inputs.params) {
            out.rows.push(UserScoreRow {
                user: user.clone(),
                category: top.category,
                score: top.score,
            });
        }
        out.stats.users_processed += 1;
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
