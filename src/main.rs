use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::warn;

use cxr_triage::config::resolve_policy;
use cxr_triage::input::{load_batch, load_binary, load_pixel_grid, load_probabilities};
use cxr_triage::logging::init_tracing;
use cxr_triage::model::{ImageQuality, QualityReport, QualityThresholds, ScreeningOutcome};
use cxr_triage::pipeline::stage7_report::{print_json, write_reports};
use cxr_triage::pipeline::{aggregate, assess, run_batch, screen_exact, screen_fallback};
use cxr_triage::report::ReportPayload;
use cxr_triage::report::json::render_error_json;

#[derive(Debug, Parser)]
#[command(name = "cxr-triage", version, about = "Triage radiograph classifier outputs")]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate one probability vector into a triage result.
    Analyze(AnalyzeArgs),
    /// Check exposure, contrast and blur of an intensity grid.
    Quality(QualityArgs),
    /// Malignant/benign screening, falling back to triage when no binary
    /// classifier output is given.
    Screen(ScreenArgs),
    /// Aggregate a JSON array of probability vectors.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    #[arg(long)]
    probs: PathBuf,
    #[arg(long)]
    image: Option<PathBuf>,
    /// Built-in profile (chest, mammography) or JSON policy file.
    #[arg(long, default_value = "chest")]
    policy: String,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct QualityArgs {
    #[arg(long)]
    image: PathBuf,
    #[arg(long)]
    policy: Option<String>,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ScreenArgs {
    /// Binary classifier output: {"malignant": p, "benign": q}.
    #[arg(long)]
    malignancy: Option<PathBuf>,
    #[arg(long)]
    probs: Option<PathBuf>,
    #[arg(long)]
    image: Option<PathBuf>,
    #[arg(long, default_value = "mammography")]
    policy: String,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "chest")]
    policy: String,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli.command) {
        println!("{}", render_error_json(&err));
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Analyze(args) => {
            let policy = resolve_policy(&args.policy).map_err(|e| e.to_string())?;
            let probs = load_probabilities(&args.probs).map_err(|e| e.to_string())?;
            let quality = assess_optional(args.image.as_deref(), &policy.quality)?;
            let triage = aggregate(&probs, &policy).map_err(|e| e.to_string())?;
            emit(
                &ReportPayload::Analysis {
                    triage: &triage,
                    quality: quality.as_ref(),
                },
                args.out.as_deref(),
            )
        }
        Command::Quality(args) => {
            let thresholds = match &args.policy {
                Some(name) => resolve_policy(name).map_err(|e| e.to_string())?.quality,
                None => QualityThresholds::default(),
            };
            let grid = load_pixel_grid(&args.image).map_err(|e| e.to_string())?;
            let report = assess(&grid, &thresholds);
            log_quality(&report);
            emit(&ReportPayload::Quality(&report), args.out.as_deref())
        }
        Command::Screen(args) => {
            let policy = resolve_policy(&args.policy).map_err(|e| e.to_string())?;
            let quality = assess_optional(args.image.as_deref(), &policy.quality)?;
            let outcome = screen(&args, &policy)?;
            emit(
                &ReportPayload::Screening {
                    outcome: &outcome,
                    quality: quality.as_ref(),
                },
                args.out.as_deref(),
            )
        }
        Command::Batch(args) => {
            let policy = resolve_policy(&args.policy).map_err(|e| e.to_string())?;
            let items = load_batch(&args.input).map_err(|e| e.to_string())?;
            let results = run_batch(&items, &policy);
            emit(&ReportPayload::Batch(&results), args.out.as_deref())
        }
    }
}

fn screen(
    args: &ScreenArgs,
    policy: &cxr_triage::model::TriagePolicy,
) -> Result<ScreeningOutcome, String> {
    match (&args.malignancy, &args.probs) {
        (Some(path), _) => {
            let probs = load_binary(path).map_err(|e| e.to_string())?;
            Ok(screen_exact(&probs))
        }
        (None, Some(path)) => {
            let probs = load_probabilities(path).map_err(|e| e.to_string())?;
            let triage = aggregate(&probs, policy).map_err(|e| e.to_string())?;
            Ok(screen_fallback(triage))
        }
        (None, None) => Err("screen needs --malignancy or --probs".to_string()),
    }
}

fn assess_optional(
    image: Option<&Path>,
    thresholds: &QualityThresholds,
) -> Result<Option<QualityReport>, String> {
    let Some(path) = image else {
        return Ok(None);
    };
    let grid = load_pixel_grid(path).map_err(|e| e.to_string())?;
    let report = assess(&grid, thresholds);
    log_quality(&report);
    Ok(Some(report))
}

fn log_quality(report: &QualityReport) {
    if report.quality == ImageQuality::Poor {
        let issues = report.issues.iter().map(|i| i.as_str()).collect::<Vec<_>>();
        warn!(issues = %issues.join(","), "low quality image detected");
    }
}

fn emit(payload: &ReportPayload<'_>, out: Option<&Path>) -> Result<(), String> {
    match out {
        Some(dir) => write_reports(payload, dir),
        None => print_json(payload),
    }
    .map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
