//! CLI entry point for the PNAD COVID analyzer.
//!
//! Provides subcommands for running the full analysis over the four survey
//! extracts and for listing the selection values a data set offers.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use pnad_covid_analyzer::output::{print_json, print_pretty, write_json, write_summary_csvs};
use pnad_covid_analyzer::session::{Session, resolve_selection};
use pnad_covid_analyzer::table::Value;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "pnad_covid_analyzer")]
#[command(about = "A tool to analyze PNAD COVID household survey extracts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputPaths {
    /// Population extract CSV
    #[arg(long)]
    populacao: PathBuf,

    /// Symptoms extract CSV
    #[arg(long)]
    sintomas: PathBuf,

    /// Behavior extract CSV
    #[arg(long)]
    comportamento: PathBuf,

    /// Economic extract CSV
    #[arg(long)]
    economia: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis for one month and state selection
    Analyze {
        #[command(flatten)]
        inputs: InputPaths,

        /// Survey month to analyze (defaults to the first available)
        #[arg(short, long)]
        mes: Option<String>,

        /// State (UF) to analyze (defaults to the first available)
        #[arg(short, long)]
        uf: Option<String>,

        /// Write the report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the three summary tables as CSV files into this directory
        #[arg(long)]
        csv_dir: Option<PathBuf>,
    },
    /// List the months and states available in the loaded extracts
    ListOptions {
        #[command(flatten)]
        inputs: InputPaths,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/pnad_covid_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("pnad_covid_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            inputs,
            mes,
            uf,
            output,
            csv_dir,
        } => {
            let session = load_session(&inputs)?;
            let period = select(&session.periods()?, mes.as_deref(), "mes")?;
            let region = select(&session.regions()?, uf.as_deref(), "UF")?;

            info!(mes = %period, uf = %region, "Running analysis");
            let start = std::time::Instant::now();
            let report = session.analyze(&period, &region)?;
            info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Analysis complete"
            );

            print_pretty(&report);
            print_json(&report)?;

            if let Some(path) = &output {
                write_json(path, &report)?;
            }
            if let Some(dir) = &csv_dir {
                write_summary_csvs(dir, &report)?;
            }
        }
        Commands::ListOptions { inputs } => {
            let session = load_session(&inputs)?;
            let periods = session.periods()?;
            let regions = session.regions()?;

            for mes in &periods {
                info!(mes = %mes, "Available month");
            }
            for uf in &regions {
                info!(uf = %uf, "Available state");
            }

            info!(
                months = periods.len(),
                states = regions.len(),
                "Selection summary"
            );
        }
    }

    Ok(())
}

fn load_session(inputs: &InputPaths) -> Result<Session> {
    let session = Session::load(
        &inputs.populacao,
        &inputs.sintomas,
        &inputs.comportamento,
        &inputs.economia,
    )?;
    Ok(session)
}

/// Resolves a selection flag against the values observed in the loaded
/// data, defaulting to the first available entry like the dashboard's
/// select boxes.
fn select(available: &[Value], raw: Option<&str>, field: &str) -> Result<Value> {
    match raw {
        None => match available.first() {
            Some(first) => Ok(first.clone()),
            None => bail!("no selectable '{field}' values in the loaded data"),
        },
        Some(raw) => match resolve_selection(available, raw) {
            Some(value) => Ok(value),
            None => bail!(
                "'{raw}' not found among the {} observed '{field}' values",
                available.len()
            ),
        },
    }
}
