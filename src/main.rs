mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{error, info};

use crate::input::{DemoRoster, InputError, JsonRosterFile, RosterSource};
use crate::model::profile::{AnalysisProfile, ConfigError};
use crate::model::summary::TiePolicy;
use crate::model::view::View;
use crate::pipeline::stage5_views::{ViewRequest, project_view};
use crate::pipeline::stage6_report::{ReportError, write_reports};
use crate::pipeline::{DeriveError, build_dashboard};
use crate::report::json::{InputMeta, ToolMeta};

#[derive(Debug, Parser)]
#[command(
    name = "classboard",
    version,
    about = "Rank a class roster and produce dashboard-ready score analytics"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write summary.json, ranking.tsv and report.txt.
    Run {
        #[command(flatten)]
        roster: RosterArgs,
        #[command(flatten)]
        analysis: AnalysisArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print one dashboard view as JSON on stdout.
    View {
        #[arg(value_parser = parse_view, default_value = "leaderboard")]
        view: View,
        #[command(flatten)]
        roster: RosterArgs,
        #[command(flatten)]
        analysis: AnalysisArgs,
        /// Student shown by the profile view.
        #[arg(long)]
        student: Option<String>,
        /// Hide leaderboard rows below this percentage.
        #[arg(long)]
        min_percentage: Option<f64>,
    },
}

#[derive(Debug, Clone, Args)]
struct RosterArgs {
    /// Roster JSON (.json or .json.gz).
    #[arg(long, required_unless_present = "demo", conflicts_with = "demo")]
    input: Option<PathBuf>,
    /// Use the built-in demo roster.
    #[arg(long)]
    demo: bool,
}

#[derive(Debug, Clone, Args)]
struct AnalysisArgs {
    /// Analysis profile JSON; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    pass_threshold: Option<f64>,
    #[arg(long, value_parser = parse_tie_policy)]
    tie_policy: Option<TiePolicy>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Derive(#[from] DeriveError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run {
            roster,
            analysis,
            out,
        } => {
            let source = roster_source(&roster);
            let profile = resolve_profile(&analysis)?;
            let records = source.load_roster()?;
            let dashboard = build_dashboard(&records, &profile)?;

            let tool = ToolMeta {
                name: "classboard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            let input = InputMeta {
                source: source.describe(),
                n_students: records.len(),
                pass_threshold: profile.pass_threshold,
                tie_policy: profile.tie_policy.as_str().to_string(),
                question_max: profile.question_max,
            };
            write_reports(&dashboard, &tool, &input, &out)?;
        }
        Command::View {
            view,
            roster,
            analysis,
            student,
            min_percentage,
        } => {
            let source = roster_source(&roster);
            let profile = resolve_profile(&analysis)?;
            let records = source.load_roster()?;
            let dashboard = build_dashboard(&records, &profile)?;

            let request = ViewRequest {
                student,
                min_percentage,
            };
            info!("projecting {} view", view);
            let content = project_view(view, &dashboard, &request);
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
    }
    Ok(())
}

fn roster_source(args: &RosterArgs) -> Box<dyn RosterSource> {
    match &args.input {
        Some(path) if !args.demo => Box::new(JsonRosterFile::new(path)),
        _ => Box::new(DemoRoster),
    }
}

fn resolve_profile(args: &AnalysisArgs) -> Result<AnalysisProfile, ConfigError> {
    let base = match &args.config {
        Some(path) => load_profile(path)?,
        None => AnalysisProfile::default_v1(),
    };
    base.with_overrides(args.pass_threshold, args.tie_policy)
}

fn load_profile(path: &Path) -> Result<AnalysisProfile, ConfigError> {
    let profile = AnalysisProfile::from_json_file(path)?;
    info!("loaded analysis profile from {}", path.display());
    Ok(profile)
}

fn parse_view(value: &str) -> Result<View, String> {
    value.parse()
}

fn parse_tie_policy(value: &str) -> Result<TiePolicy, String> {
    match value {
        "ordinal" => Ok(TiePolicy::Ordinal),
        "shared" => Ok(TiePolicy::Shared),
        _ => Err("invalid tie policy (use ordinal|shared)".to_string()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
