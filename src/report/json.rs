use serde_json::json;

use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

pub fn render_pipeline_step_json(data: &SummaryData) -> serde_json::Result<String> {
    let step = json!({
        "tool": data.tool.name,
        "mode": "pipeline",
        "artifacts": {
            "summary": "summary.json",
            "primary_metrics": "top3_by_user.tsv",
            "report": "report.txt",
        },
        "user_metrics": {
            "file": "top3_by_user.tsv",
            "user_column": "user",
            "category_column": "category",
            "score_column": "score",
        },
        "key_metrics": {
            "users_processed": data.stats.users_processed,
            "images_processed": data.stats.images_processed,
            "images_degraded": data.stats.images_degraded,
            "rows": data.rows.len(),
        },
    });
    serde_json::to_string_pretty(&step)
}
