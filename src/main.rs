//! CLI entry point for the Hong Kong district case dashboard backend.
//!
//! `serve` runs the JSON API and dashboard page; `report` prints the
//! aggregates for a dataset to the log without starting a server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hk_epidemic_dashboard::analyzers::{daily_statistics, summary};
use hk_epidemic_dashboard::dataset::CaseSource;
use hk_epidemic_dashboard::output::{print_head, print_json, print_pretty, write_daily_csv};
use hk_epidemic_dashboard::server::{self, ServerConfig};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "hk_epidemic_dashboard")]
#[command(about = "Serves district case statistics to the dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API and dashboard page
    Serve {
        /// Spreadsheet (xlsx or csv) holding the district case table
        #[arg(long, env = "DATA_FILE", default_value = "香港各区疫情数据_20250322.xlsx")]
        data: PathBuf,

        /// GeoJSON file with district boundaries
        #[arg(long, env = "BOUNDARY_FILE", default_value = "hongkong.json")]
        boundary: PathBuf,

        /// Address to bind
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
    /// Print a preview of the dataset and its daily statistics
    Report {
        /// Spreadsheet (xlsx or csv) holding the district case table
        #[arg(long, env = "DATA_FILE", default_value = "香港各区疫情数据_20250322.xlsx")]
        data: PathBuf,

        /// Number of leading rows to print
        #[arg(long, default_value_t = 20)]
        head: usize,

        /// Optional: write daily statistics to this CSV file
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/hk_epidemic_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("hk_epidemic_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

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

    match cli.command {
        Commands::Serve {
            data,
            boundary,
            host,
            port,
        } => {
            server::run(ServerConfig {
                data_file: data,
                boundary_file: boundary,
                host,
                port,
            })
            .await?;
        }
        Commands::Report { data, head, output } => {
            report(&data, head, output.as_deref())?;
        }
    }

    Ok(())
}

/// Loads the dataset once and logs a preview, the daily table and the summary.
#[tracing::instrument(skip(data), fields(data = %data.display()))]
fn report(data: &Path, head: usize, output: Option<&str>) -> Result<()> {
    let source = CaseSource::new(data);
    let table = source.load()?;

    if table.is_empty() {
        warn!(path = %source.path().display(), "Dataset has no rows");
    }
    info!(
        path = %source.path().display(),
        rows = table.len(),
        regions = table.regions().len(),
        "Dataset loaded"
    );
    print_head(&table, head);

    let daily = daily_statistics(&table)?;
    print_pretty(&daily);
    for (i, date) in daily.dates.iter().enumerate() {
        info!(
            date = %date,
            new_cases = daily.new_cases[i],
            total_cases = daily.total_cases[i],
            growth_rate = daily.growth_rates[i],
            "Daily totals"
        );
    }

    if !table.is_empty() {
        print_json(&summary(&table)?)?;
    }

    if let Some(path) = output {
        write_daily_csv(path, &daily)?;
        info!(path, "Daily statistics written");
    }

    Ok(())
}
