//! Validates a product CSV file before it is uploaded.
//!
//! Usage:
//!
//! ```text
//! csv_gate <FILE> [--chunk-size N] [--naive] [--errors-out PATH] [--with-header] [--json]
//! ```
//!
//! The report goes to standard output and logs go to standard error
//! (`RUST_LOG` overrides the default `info` filter). The exit status is `0`
//! when every row is valid, `1` when at least one row has errors and `2` when
//! the file cannot be read or the scan faults.

use clap::Parser;
use csv_gate::{
    session::{
        ExportError, ExportOptions, ProductValidationSession, SessionError, SessionSnapshot,
        SessionStatus,
    },
    validation::{
        domain::ValidationResult,
        ports::validator::{DEFAULT_CHUNK_SIZE, ScanConfig},
        tokenizer::QuoteMode,
    },
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "csv_gate", version, about = "Validate a product CSV file")]
struct Args {
    /// CSV file to validate.
    file: PathBuf,

    /// Data rows validated between progress reports.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Split fields on every comma, ignoring double quotes.
    #[arg(long)]
    naive: bool,

    /// Write the offending lines to this file.
    #[arg(long, value_name = "PATH")]
    errors_out: Option<PathBuf>,

    /// Keep the header line in the errors file.
    #[arg(long, requires = "errors_out")]
    with_header: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("validation aborted: {0}")]
    Fault(String),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to write {}: {source}", path.display())]
    WriteErrors {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Valid,
    Invalid,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args).await {
        Ok(Verdict::Valid) => ExitCode::SUCCESS,
        Ok(Verdict::Invalid) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %err, file = %args.file.display(), "csv_gate failed");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run(args: &Args) -> Result<Verdict, CliError> {
    let quote_mode = if args.naive {
        QuoteMode::Naive
    } else {
        QuoteMode::Rfc4180
    };
    let config = ScanConfig::default()
        .with_chunk_size(args.chunk_size)
        .with_quote_mode(quote_mode);
    let export = if args.with_header {
        ExportOptions::default().with_header()
    } else {
        ExportOptions::default()
    };

    let mut session = ProductValidationSession::for_products(config).with_export_options(export);
    session.validate_file(&args.file).await?;
    let snapshot = follow(&session).await;

    let result = match snapshot.status() {
        SessionStatus::Completed(result) => result,
        SessionStatus::Errored { message } => return Err(CliError::Fault(message.clone())),
        SessionStatus::Idle | SessionStatus::Validating { .. } => {
            return Err(CliError::Fault("session ended without a result".to_owned()));
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, result.as_ref())?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &args.file, result)?;
    }

    if result.is_valid() {
        return Ok(Verdict::Valid);
    }
    if let Some(path) = &args.errors_out {
        let artifact = session.try_export()?;
        tokio::fs::write(path, artifact.bytes())
            .await
            .map_err(|source| CliError::WriteErrors {
                path: path.clone(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            lines = result.error_lines().len(),
            "error lines written"
        );
    }
    Ok(Verdict::Invalid)
}

/// Logs progress in ten-percent steps until the session settles.
async fn follow(session: &ProductValidationSession) -> SessionSnapshot {
    let mut updates = session.subscribe();
    let mut reported = 0_u8;
    loop {
        let snapshot = updates.borrow_and_update().clone();
        let Some(progress) = snapshot.progress() else {
            return snapshot;
        };
        let step = tenths(progress.progress_fraction());
        if step > reported {
            reported = step;
            tracing::info!(
                processed_lines = progress.processed_lines(),
                percent = u16::from(step) * 10,
                "validating"
            );
        }
        if updates.changed().await.is_err() {
            return session.snapshot();
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the fraction is clamped to [0, 1] so the product fits in a u8"
)]
fn tenths(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 10.0).floor() as u8
}

fn write_report(
    out: &mut impl Write,
    file: &Path,
    result: &ValidationResult,
) -> Result<(), CliError> {
    let verdict = if result.is_valid() { "valid" } else { "invalid" };
    writeln!(
        out,
        "{}: {verdict}, {} rows, {} valid, {} invalid ({:.1} ms)",
        file.display(),
        result.total_lines(),
        result.valid_lines(),
        result.invalid_lines(),
        result.validation_time_ms(),
    )?;
    for error in result.errors() {
        writeln!(out, "  {:<22} {error}", error.reason.code())?;
    }
    Ok(())
}
