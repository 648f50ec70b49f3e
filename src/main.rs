mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use crate::input::{InputError, InputSource, load_input};
use crate::model::profile::{EmptyKeyValuePolicy, ParserProfile, ProfileError};
use crate::pipeline::analyze;
use crate::pipeline::stage6_report::{ReportError, ReportMode, write_reports};
use crate::report::json::render_report_json;
use crate::report::{AnalysisReport, InputInfo, ToolInfo};

const TOOL_NAME: &str = "narrative-struct";

#[derive(Debug, Parser)]
#[command(
    name = "narrative-struct",
    about = "Structure free-form business analysis text into sections, scores, tables and paragraphs",
    version
)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one text file and write reports
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Input text file (`.gz` is decompressed); `-` reads stdin
    #[arg(long)]
    input: PathBuf,

    /// Output directory for analysis.json, report.txt and key_values.tsv
    #[arg(long, required_unless_present = "stdout")]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ModeArg::Full)]
    mode: ModeArg,

    /// Print analysis JSON to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// JSON parser profile overriding the built-in defaults
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Labels at or above this many characters are treated as prose
    #[arg(long)]
    key_max_chars: Option<usize>,

    /// Discard `Label:` lines with nothing after the colon
    #[arg(long)]
    drop_empty_values: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Full,
    Summary,
}

impl From<ModeArg> for ReportMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Full => ReportMode::Full,
            ModeArg::Summary => ReportMode::Summary,
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(logging::level_for(cli.verbose, cli.quiet));

    let result = match &cli.command {
        Command::Run(args) => run(args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), AppError> {
    let profile = resolve_profile(args)?;
    let source = InputSource::from_arg(&args.input);
    let loaded = load_input(&source)?;

    let analysis = analyze(&loaded.text, &profile);
    if analysis.stats.headings == 0 && !loaded.text.is_blank() {
        tracing::warn!("no headings detected in {}", loaded.source);
    }
    match &analysis.verdict {
        Some(v) => info!("overall score {} -> {}", v.score, v.tier.label()),
        None => info!("no scores present"),
    }

    let report = AnalysisReport::build(
        &analysis,
        &profile,
        ToolInfo {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        InputInfo {
            source: loaded.source.clone(),
            bytes: loaded.bytes,
        },
    );

    if args.stdout {
        let json = render_report_json(&report).map_err(ReportError::from)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes()).map_err(AppError::Stdout)?;
        stdout.flush().map_err(AppError::Stdout)?;
        return Ok(());
    }

    if let Some(out_dir) = &args.out {
        let written = write_reports(&report, out_dir, args.mode.into())?;
        info!("wrote {} report files to {}", written.len(), out_dir.display());
    }
    Ok(())
}

fn resolve_profile(args: &RunArgs) -> Result<ParserProfile, ProfileError> {
    let mut profile = match &args.profile {
        Some(path) => {
            info!("using parser profile {}", path.display());
            ParserProfile::load(path)?
        }
        None => ParserProfile::default_v1(),
    };
    if let Some(n) = args.key_max_chars {
        profile.key_max_chars = n;
    }
    if args.drop_empty_values {
        profile.empty_key_value = EmptyKeyValuePolicy::Drop;
    }
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
