//! DME order extraction
//!
//! Reads one physician note, extracts the equipment order and posts it to
//! the configured API. The exit code identifies the failure kind.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dme_extract::api::HttpTransport;
use dme_extract::pipeline::{extract_from_path, process_note};
use dme_extract::settings::{Settings, DEFAULT_LOG_LEVEL};
use dme_extract::telemetry::init_tracing;
use dme_extract::ProcessError;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "dme-extract",
    about = "Extract a DME order from a physician note and post it to the ordering API"
)]
struct Cli {
    /// Note to process; overrides the configured PhysicianNotePath
    note: Option<PathBuf>,
    /// Settings file (JSON or TOML); defaults to ./appsettings.json when present
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured ApiUrl
    #[arg(long)]
    api_url: Option<String>,
    /// Print the extracted order to stdout instead of sending it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            init_tracing(DEFAULT_LOG_LEVEL);
            return report(&ProcessError::unexpected(format!("{err:#}")));
        }
    };
    init_tracing(&settings.log_level);

    match run(cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

async fn run(cli: Cli, settings: Settings) -> Result<(), ProcessError> {
    info!("Starting DME extraction process");

    let note_path = match cli.note {
        Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => {
            info!(path = %path.display(), "File path overridden via command line");
            path
        }
        _ => settings.physician_note_path.clone(),
    };
    let api_url = cli.api_url.unwrap_or_else(|| settings.api_url.clone());

    if cli.dry_run {
        let order = extract_from_path(&note_path)?;
        let json = serde_json::to_string_pretty(&order)
            .map_err(|err| ProcessError::unexpected(err.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    let transport = HttpTransport::new(settings.timeout())?;
    process_note(&note_path, &api_url, &transport).await?;
    Ok(())
}

fn report(err: &ProcessError) -> ExitCode {
    match err {
        ProcessError::NotFound { path } => {
            error!(path = %path.display(), error = %err, "File not found");
        }
        ProcessError::InvalidFormat { .. } => error!(error = %err, "Invalid file format"),
        ProcessError::TransportFailure { .. } => {
            error!(error = %err, "HTTP request failed while sending data to API");
        }
        ProcessError::Timeout { .. } => error!(error = %err, "API request timed out"),
        ProcessError::Unexpected { .. } => error!(error = %err, "An unexpected error occurred"),
    }
    ExitCode::from(err.exit_code())
}
