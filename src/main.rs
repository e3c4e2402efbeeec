use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use stressline_lib::{
    charts::TimelineCharts,
    report::{compose_now, JsonRenderer, PlainTextRenderer, ReportRenderer},
    summarize, timeline::read_detections, utils, CandidateProfile, EngineSettings, MomentView,
    Normalizer, SessionContext, SummaryRecord, Timeline,
};

const ENABLE_LOGS: bool = true;

use stressline_lib::{log_error, log_info};

#[derive(Parser, Debug)]
#[command(name = "stressline", about = "Replay an interview's emotion and stress timeline")]
struct Cli {
    /// Detector output, one JSON object per line
    input: PathBuf,

    /// Engine settings file
    #[arg(long, default_value = "stressline.json")]
    settings: PathBuf,

    /// Candidate the session belongs to
    #[arg(long, default_value = "Unknown")]
    candidate: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Session summary record as JSON
    Summary,
    /// Summary report
    Report {
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Write into this directory instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// The moment nearest to a timestamp
    Scrub {
        #[arg(long)]
        at: i64,
    },
    /// Chart series for the whole session
    Charts,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() {
    utils::logging::init();

    if let Err(err) = run(Cli::parse()) {
        log_error!("{err:?}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = EngineSettings::load(&cli.settings)?;
    let normalizer = Normalizer::from_settings(&settings);
    let timeline = load_timeline(&cli.input, &normalizer)?;
    let context = SessionContext::new(CandidateProfile::named(cli.candidate));

    log_info!(
        "loaded {} samples for {} (session {})",
        timeline.len(),
        context.candidate_name(),
        context.session_id
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Summary => {
            let summary = summarize(&timeline, &context)
                .context("summary not available for this session")?;
            let record = SummaryRecord::from_summary(&summary, &settings.display_zone);
            serde_json::to_writer_pretty(&mut out, &record)?;
            writeln!(out)?;
        }
        Command::Report { format, out: dir } => {
            let summary = summarize(&timeline, &context)
                .context("report not available for this session")?;
            let report = compose_now(&summary, &settings.display_zone);
            let renderer: Box<dyn ReportRenderer> = match format {
                ReportFormat::Text => Box::new(PlainTextRenderer),
                ReportFormat::Json => Box::new(JsonRenderer),
            };
            let bytes = renderer.render(&report)?;

            match dir {
                Some(dir) => {
                    let path = dir.join(renderer.file_name(&report));
                    fs::write(&path, &bytes)
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    log_info!("report written to {}", path.display());
                }
                None => out.write_all(&bytes)?,
            }
        }
        Command::Scrub { at } => {
            let view = MomentView::at(&timeline, at, &settings.display_zone)
                .context("no moment available for this session")?;
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
        Command::Charts => {
            let charts =
                TimelineCharts::build(&timeline).context("charts not available for this session")?;
            serde_json::to_writer_pretty(&mut out, &charts)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn load_timeline(path: &Path, normalizer: &Normalizer) -> Result<Timeline> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open detector output {}", path.display()))?;
    read_detections(BufReader::new(file), normalizer)
        .with_context(|| format!("Failed to read {}", path.display()))
}
