//! CLI entry point for the launch weather report tool.
//!
//! Reads a daily forecast table, keeps the days that satisfy the launch-safety
//! criteria, writes per-parameter statistics to a CSV report and hands the
//! report off for delivery.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use launch_weather::{
    PipelineError,
    criteria::LaunchCriteria,
    delivery::{HttpNotifier, LogNotifier, Notifier},
    fetch::{BasicClient, load_source},
    filter::evaluate,
    output::{print_json, print_pretty, write_report},
    pipeline::run,
    report::ReportSummary,
    table::parse_table,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Exit status when the forecast has no day suitable for launch.
const EXIT_NO_QUALIFYING_DAY: i32 = 2;

#[derive(Parser)]
#[command(name = "launch_weather")]
#[command(about = "Summarize forecast days that are safe for launch", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the weather report from a forecast file or URL and deliver it
    Report {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// CSV file to write the report to
        #[arg(short, long, default_value = "WeatherReport.csv")]
        output: String,

        /// JSON file overriding the launch thresholds
        #[arg(short, long)]
        criteria: Option<String>,

        /// Sender address used for delivery
        #[arg(long, env = "REPORT_SENDER")]
        from: Option<String>,

        /// Recipient addresses (repeat or comma-separate)
        #[arg(long, env = "REPORT_RECIPIENTS", value_delimiter = ',')]
        to: Vec<String>,

        /// Optional: webhook endpoint the report is posted to
        #[arg(long, env = "REPORT_WEBHOOK_URL")]
        webhook: Option<String>,

        /// How to log the finished report
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// List every forecast day with the criteria it fails
    Days {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// JSON file overriding the launch thresholds
        #[arg(short, long)]
        criteria: Option<String>,
    },
    /// Print the effective launch thresholds as JSON
    Criteria {
        /// JSON file overriding the launch thresholds
        #[arg(short, long)]
        criteria: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/launch_weather.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("launch_weather.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let outcome = execute(cli.command).await;

    if let Err(e) = &outcome {
        if matches!(e.downcast_ref::<PipelineError>(), Some(PipelineError::EmptyResultSet)) {
            warn!("No forecast day qualifies for launch; no report written");
            drop(file_guard);
            std::process::exit(EXIT_NO_QUALIFYING_DAY);
        }
        error!(error = %e, "Run failed");
    }

    outcome
}

async fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Report {
            source,
            output,
            criteria,
            from,
            to,
            webhook,
            format,
        } => {
            let criteria = LaunchCriteria::load_or_default(criteria.as_deref())?;
            let bytes = load_source(&source).await?;
            let result = run(&bytes, &criteria)?;

            write_report(&output, &result.report)?;
            info!(
                path = %output,
                parameters = result.report.rows.len(),
                qualifying = result.qualifying.len(),
                "Weather report written"
            );

            match format {
                Format::Csv => print_pretty(&result.report),
                Format::Json => print_json(&ReportSummary {
                    generated_at: Utc::now(),
                    qualifying_days: result.qualifying_days(),
                    parameters: result.report.rows.clone(),
                })?,
            }

            deliver(&output, from, &to, webhook).await?;
        }
        Commands::Days { source, criteria } => {
            let criteria = LaunchCriteria::load_or_default(criteria.as_deref())?;
            let bytes = load_source(&source).await?;
            let table = parse_table(&bytes)?;
            let verdicts = evaluate(&table, &criteria);

            for verdict in &verdicts {
                let failed: Vec<String> = verdict.violations.iter().map(|c| c.to_string()).collect();
                info!(
                    day = %verdict.day,
                    qualifies = verdict.qualifies,
                    failed = %failed.join(","),
                    "Day"
                );
            }

            let qualifying = verdicts.iter().filter(|v| v.qualifies).count();
            info!(total = verdicts.len(), qualifying, "Forecast summary");
        }
        Commands::Criteria { criteria } => {
            let criteria = LaunchCriteria::load_or_default(criteria.as_deref())?;
            info!("{}", serde_json::to_string_pretty(&criteria)?);
        }
    }

    Ok(())
}

/// Hands the written report to the configured notifier. Skipped when no
/// recipients are configured.
#[tracing::instrument(skip_all, fields(artifact = %artifact))]
async fn deliver(
    artifact: &str,
    from: Option<String>,
    recipients: &[String],
    webhook: Option<String>,
) -> Result<()> {
    if recipients.is_empty() {
        info!("No recipients configured, skipping delivery");
        return Ok(());
    }

    let sender = from.unwrap_or_default();
    let notifier: Box<dyn Notifier> = match webhook {
        Some(endpoint) => Box::new(HttpNotifier::new(BasicClient::new(), endpoint)),
        None => Box::new(LogNotifier),
    };

    notifier
        .deliver(Path::new(artifact), &sender, recipients)
        .await
}
