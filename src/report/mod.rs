pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::scores::UserScoreRow;
use crate::pipeline::RunStats;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub run_mode: String,
    pub input_dir: String,
    pub categories_source: String,
    pub classifier: String,
    pub user_filter: Option<String>,
    pub n_categories: usize,
    pub stats: RunStats,
    pub rows: Vec<UserScoreRow>,
}

pub fn format_score(v: f64) -> String {
    format!("{:.3}", v)
}

/// Groups consecutive rows by user, keeping row order.
pub fn rows_by_user(rows: &[UserScoreRow]) -> Vec<(&str, Vec<&UserScoreRow>)> {
    let mut out: Vec<(&str, Vec<&UserScoreRow>)> = Vec::new();
    for row in rows {
        if let Some((user, group)) = out.last_mut() {
            if *user == row.user {
                group.push(row);
                continue;
            }
        }
        out.push((row.user.as_str(), vec![row]));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
