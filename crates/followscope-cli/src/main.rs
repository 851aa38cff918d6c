use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use followscope_core::AppConfig;

mod report;

/// Default filename of the exported record set inside the processed-data
/// directory.
const PROCESSED_FILE_NAME: &str = "processed_data.csv";

#[derive(Debug, Parser)]
#[command(name = "followscope")]
#[command(about = "Competitor mat-listing normalization and comparison pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Process raw scrape files into a normalized record set CSV.
    Process {
        /// Raw-data directory to walk (defaults to the configured one).
        #[arg(long)]
        raw_dir: Option<PathBuf>,
        /// Output CSV path (defaults to the configured processed-data file).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a per-competitor summary of a processed record set.
    Report {
        /// Processed CSV to summarize (defaults to the configured one).
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = followscope_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Process { raw_dir, out }) => run_process(&config, raw_dir, out),
        Some(Commands::Report { input }) => {
            let input = input.unwrap_or_else(|| default_processed_file(&config));
            report::run_report(&input)
        }
        // Bare invocation runs a full processing pass with configured paths.
        None => run_process(&config, None, None),
    }
}

fn default_processed_file(config: &AppConfig) -> PathBuf {
    config.processed_data_dir.join(PROCESSED_FILE_NAME)
}

fn run_process(
    config: &AppConfig,
    raw_dir: Option<PathBuf>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let raw_dir = raw_dir.unwrap_or_else(|| config.raw_data_dir.clone());
    let out = out.unwrap_or_else(|| default_processed_file(config));

    let output = followscope_pipeline::process_raw_data(&raw_dir)?;
    followscope_pipeline::export_records(&output.records, &out)?;

    let summary = output.summary;
    println!(
        "Processed {} of {} files ({} failed)",
        summary.files_processed, summary.files_discovered, summary.files_failed
    );
    println!(
        "Rows read: {}, skipped: {}",
        summary.rows_read, summary.rows_skipped
    );
    println!(
        "Wrote {} records to {}",
        summary.records_produced,
        out.display()
    );
    Ok(())
}
