use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::scores::UserScoreRow;
use crate::pipeline::RunStats;
use crate::report::json::{render_pipeline_step_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{SummaryData, ToolMeta, format_score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RunMode {
    Standalone,
    Pipeline,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Standalone => "standalone",
            RunMode::Pipeline => "pipeline",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub rows: &'a [UserScoreRow],
    pub stats: &'a RunStats,
    pub run_mode: RunMode,
    pub input_dir: String,
    pub categories_source: String,
    pub classifier: String,
    pub user_filter: Option<String>,
    pub n_categories: usize,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let rows_path = out_dir.join("top3_by_user.tsv");
    write_rows_tsv(input.rows, &rows_path)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(&summary))?;

    if input.run_mode == RunMode::Pipeline {
        let pipeline_path = out_dir.join("pipeline_step.json");
        write_text(&pipeline_path, &render_pipeline_step_json(&summary)?)?;
    }

    tracing::info!(
        out_dir = %out_dir.display(),
        rows = input.rows.len(),
        "reports written"
    );
    Ok(())
}

pub fn write_rows_tsv(rows: &[UserScoreRow], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "user\tcategory\tscore")?;
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{}",
            tsv_field(&row.user),
            tsv_field(&row.category),
            format_score(row.score)
        )?;
    }
    w.flush()
}

fn build_summary(input: &Stage4Input<'_>) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        run_mode: input.run_mode.as_str().to_string(),
        input_dir: input.input_dir.clone(),
        categories_source: input.categories_source.clone(),
        classifier: input.classifier.clone(),
        user_filter: input.user_filter.clone(),
        n_categories: input.n_categories,
        stats: input.stats.clone(),
        rows: input.rows.to_vec(),
    }
}

fn tsv_field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
