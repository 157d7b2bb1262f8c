mod curve;
mod error;
mod input;
mod metrics;
mod pipeline;
mod plot;
mod report;
mod tracing_setup;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::curve::average::AverageParams;
use crate::curve::interp::DomainPolicy;
use crate::curve::step::StepOrder;
use crate::metrics::ThresholdMetrics;
use crate::pipeline::RunError;
use crate::pipeline::stage1_load::{Stage1Params, run_stage1};
use crate::pipeline::stage2_metrics::run_stage2;
use crate::pipeline::stage3_average::run_stage3;
use crate::pipeline::stage4_figures::{FigureParams, FigureSelection, run_stage4};
use crate::pipeline::stage5_report::{RunMode, Stage5Input, write_reports};
use crate::plot::figures::{PrParams, RocParams, TpAtKParams};
use crate::plot::{CurveKind, CurveStyle, LegendPos, StepWhere};
use crate::tracing_setup::{Verbosity, init_tracing};

const TOOL_NAME: &str = "kira-prcurves";

#[derive(Debug, Parser)]
#[command(name = "kira-prcurves", version, about = "Averaged precision-recall curves")]
struct Cli {
    /// Debug-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Errors only.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute per-model and averaged curves and write reports.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Prediction table (TSV, optionally .gz). Repeat for several files.
    #[arg(long = "input", required = true)]
    inputs: Vec<PathBuf>,
    #[arg(long)]
    out: PathBuf,
    /// Model name override, applied in load order.
    #[arg(long = "name")]
    names: Vec<String>,
    #[arg(long, value_enum, default_value_t = FigureSelection::All)]
    figure: FigureSelection,
    #[arg(long, value_enum, default_value_t = CurveKind::Step)]
    curve: CurveKind,
    #[arg(long = "where", value_enum, default_value_t = StepWhere::Post)]
    step_where: StepWhere,
    #[arg(long, value_enum, default_value_t = LegendPos::Inside)]
    legend: LegendPos,
    /// Add the weighted average curve to the precision-recall figure.
    #[arg(long)]
    average: bool,
    #[arg(long)]
    no_random_shuffle: bool,
    #[arg(long)]
    roc_random_shuffle: bool,
    #[arg(long)]
    random_uniform: bool,
    #[arg(long)]
    no_binary_as_point: bool,
    /// Sort curve points by recall instead of trusting provider order.
    #[arg(long)]
    sort_steps: bool,
    /// Clamp interpolant queries outside the recall domain.
    #[arg(long)]
    clamp_domain: bool,
    #[arg(long, value_enum, default_value_t = RunMode::Standalone)]
    run_mode: RunMode,
}

#[derive(Debug, Clone)]
struct RunConfig {
    inputs: Vec<PathBuf>,
    names: Vec<String>,
    out_dir: PathBuf,
    average: AverageParams,
    figures: FigureParams,
    run_mode: RunMode,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        let average = AverageParams {
            step_order: if args.sort_steps {
                StepOrder::Unsorted
            } else {
                StepOrder::ProviderDescending
            },
            domain: if args.clamp_domain {
                DomainPolicy::Clamp
            } else {
                DomainPolicy::Strict
            },
        };
        let style = CurveStyle {
            kind: args.curve,
            step_where: args.step_where,
        };
        let figures = FigureParams {
            selection: args.figure,
            roc: RocParams {
                style,
                legend: args.legend,
                random_shuffle: args.roc_random_shuffle,
            },
            pr: PrParams {
                style,
                legend: args.legend,
                random_shuffle: !args.no_random_shuffle,
                average: args.average,
                binary_as_point: !args.no_binary_as_point,
                average_params: average,
                ..PrParams::default()
            },
            tp_at_k: TpAtKParams {
                style,
                legend: args.legend,
                random_uniform: args.random_uniform,
            },
        };
        RunConfig {
            inputs: args.inputs,
            names: args.names,
            out_dir: args.out,
            average,
            figures,
            run_mode: args.run_mode,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(Verbosity::from_flags(cli.verbose, cli.quiet));

    let Command::Run(args) = cli.command;
    if let Err(err) = run(&RunConfig::from(args)) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), RunError> {
    let out_dir = resolve_output_dir(&config.out_dir, config.run_mode);
    let metrics = ThresholdMetrics;

    let models = run_stage1(&Stage1Params {
        inputs: &config.inputs,
        names: &config.names,
    })?;
    let summaries = run_stage2(&metrics, &models)?;
    let average = run_stage3(&metrics, &models, &config.average)?;
    let figures = run_stage4(&metrics, &models, &config.figures);

    let input = Stage5Input {
        inputs: &config.inputs,
        models: &models,
        summaries: &summaries,
        average: &average,
        figures: &figures,
        average_params: config.average,
        figure_params: config.figures,
        run_mode: config.run_mode,
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: read_git_hash(Path::new(".")),
    };
    write_reports(&input, &out_dir)?;

    tracing::info!(
        out = %out_dir.display(),
        models = models.sets.len(),
        auprc = average.auprc,
        "run complete"
    );
    Ok(())
}

fn resolve_output_dir(base: &Path, run_mode: RunMode) -> PathBuf {
    match run_mode {
        RunMode::Standalone => base.to_path_buf(),
        RunMode::Pipeline => base.join(TOOL_NAME),
    }
}

fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = std::fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return std::fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
