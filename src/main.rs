mod catalog;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::catalog::defs::builtin_catalog;
use crate::catalog::load_catalog;
use crate::input::{Classifier, LocalImageSource, SidecarClassifier};
use crate::model::params::ScoringParams;
use crate::pipeline::stage4_report::{RunMode, Stage4Input, write_reports};
use crate::pipeline::{PipelineError, PipelineInputs, run_pipeline};

const TOOL_NAME: &str = "kira-imagecat";

/// Rank the top image categories of each user from classifier labels.
#[derive(Parser, Debug)]
#[command(name = "kira-imagecat", version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score users and write reports
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Data directory holding one sub-directory of images per user
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Category definitions (.json or .json.gz); built-in categories when omitted
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Only process this user
    #[arg(long)]
    user: Option<String>,

    #[arg(long, value_enum, default_value_t = RunMode::Standalone)]
    run_mode: RunMode,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            tracing::error!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    match cli.command {
        Command::Run(args) => run_scoring(&args),
    }
}

fn run_scoring(args: &RunArgs) -> Result<(), PipelineError> {
    let (mapping, categories_source) = match &args.categories {
        Some(path) => (load_catalog(path)?, path.display().to_string()),
        None => {
            tracing::info!("no category file given; using built-in categories");
            (builtin_catalog(), "builtin".to_string())
        }
    };

    let source = LocalImageSource::new(&args.input)?;
    let classifier = SidecarClassifier::new();
    let params = ScoringParams::default_v1();

    let output = run_pipeline(&PipelineInputs {
        mapping: &mapping,
        source: &source,
        classifier: &classifier,
        params: &params,
        user_filter: args.user.as_deref(),
    })?;

    tracing::info!(
        users = output.stats.users_processed,
        images = output.stats.images_processed,
        degraded = output.stats.images_degraded,
        rows = output.rows.len(),
        "scoring finished"
    );

    let out_dir = resolve_output_dir(&args.out, args.run_mode);
    write_reports(
        &Stage4Input {
            rows: &output.rows,
            stats: &output.stats,
            run_mode: args.run_mode,
            input_dir: args.input.display().to_string(),
            categories_source,
            classifier: classifier.name().to_string(),
            user_filter: args.user.clone(),
            n_categories: mapping.categories.len(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        &out_dir,
    )?;

    Ok(())
}

fn resolve_output_dir(base: &Path, run_mode: RunMode) -> PathBuf {
    match run_mode {
        RunMode::Standalone => base.to_path_buf(),
        RunMode::Pipeline => base.join(TOOL_NAME),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
