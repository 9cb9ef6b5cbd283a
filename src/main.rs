//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sms_search` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use sms_search::config::{DEFAULT_BIND_ADDRESS, DEFAULT_DATA_FILE, DEFAULT_PORT};
use sms_search::demo::{render_benchmark, render_comparison, render_recommendations};
use sms_search::initialization::init_logger_with;
use sms_search::{run_demo, serve, DemoConfig, LogFormat, LogLevel, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "sms_search", version, about = "SMS transactions API and search comparison")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the transactions API
    Serve(ServeCommand),
    /// Compare the search algorithms on a dataset and print the results
    Demo(DemoCommand),
}

#[derive(Debug, Args)]
struct LoggingArgs {
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[derive(Debug, Args)]
struct ServeCommand {
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    bind: String,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Accepted credentials as user:password (repeatable)
    #[arg(
        long = "credential",
        env = "SMS_API_CREDENTIALS",
        value_delimiter = ',',
        default_values_t = ServerConfig::default().credentials
    )]
    credentials: Vec<String>,
    /// Refuse datasets with duplicate transaction IDs
    #[arg(long)]
    strict_identifiers: bool,
    #[command(flatten)]
    logging: LoggingArgs,
}

#[derive(Debug, Args)]
struct DemoCommand {
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,
    /// Transaction ID to compare
    #[arg(long, default_value_t = 1)]
    id: u64,
    /// Transaction IDs to benchmark (comma-separated)
    #[arg(long, value_delimiter = ',')]
    benchmark_ids: Option<Vec<u64>>,
    /// Refuse datasets with duplicate transaction IDs
    #[arg(long)]
    strict_identifiers: bool,
    #[command(flatten)]
    logging: LoggingArgs,
}

fn init_logging(logging: &LoggingArgs) -> Result<()> {
    init_logger_with(logging.log_level.clone().into(), logging.log_format.clone())
        .context("Failed to initialize logger")
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(cmd) => {
            init_logging(&cmd.logging)?;
            let config = ServerConfig {
                data_file: cmd.data_file,
                bind: cmd.bind,
                port: cmd.port,
                credentials: cmd.credentials,
                strict_identifiers: cmd.strict_identifiers,
            };
            if let Err(e) = serve(config).await {
                eprintln!("sms_search error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
        Command::Demo(cmd) => {
            init_logging(&cmd.logging)?;
            let config = DemoConfig {
                data_file: cmd.data_file,
                id: cmd.id,
                benchmark_ids: cmd.benchmark_ids,
                strict_identifiers: cmd.strict_identifiers,
            };
            match run_demo(&config) {
                Ok(report) => {
                    println!("🔍 SMS Transactions Search Algorithms Demo");
                    println!("{}", "=".repeat(50));
                    println!(
                        "Dataset size: {} transactions\n",
                        report.comparison.performance_analysis.dataset_size
                    );
                    println!("{}", render_comparison(&report.comparison));
                    println!("{}", render_benchmark(&report.benchmark));
                    println!("{}", render_recommendations());
                    Ok(())
                }
                Err(e) => {
                    eprintln!("sms_search error: {:#}", e);
                    process::exit(1);
                }
            }
        }
    }
}
