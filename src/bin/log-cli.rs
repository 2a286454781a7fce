use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use logging_client::config::{load_config, validate_config, ClientConfig, ConfigError};
use logging_client::observability::logging::{init_tracing, DEFAULT_FILTER};
use logging_client::{LogLevel, LoggingClient};

#[derive(Parser)]
#[command(name = "log-cli")]
#[command(about = "Emit a single log message through the logging client", long_about = None)]
struct Cli {
    /// TOML file with owning_service_name, remote_enabled and log_target
    #[arg(short, long, conflicts_with_all = ["service", "remote", "target"])]
    config: Option<PathBuf>,

    /// Owning service name stamped on remote entries
    #[arg(short, long, default_value = "log-cli")]
    service: String,

    /// Post to a remote collector instead of appending to a file
    #[arg(short, long)]
    remote: bool,

    /// Log file path, or collector URL with --remote
    #[arg(short, long, default_value = "")]
    target: String,

    /// Label attached to the entry (repeatable)
    #[arg(short, long = "label")]
    labels: Vec<String>,

    /// Milliseconds to wait for the detached remote send before exiting
    #[arg(long, default_value_t = 500)]
    wait_ms: u64,

    /// trace, debug, info, warn or error (case-insensitive)
    level: LogLevel,

    message: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(DEFAULT_FILTER);
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let config = ClientConfig {
                owning_service_name: cli.service.clone(),
                remote_enabled: cli.remote,
                log_target: cli.target.clone(),
            };
            validate_config(&config).map_err(ConfigError::Validation)?;
            config
        }
    };

    let client = LoggingClient::from_config(&config);
    let labels: Vec<&str> = cli.labels.iter().map(String::as_str).collect();

    if let Err(e) = client.log_at(cli.level, &cli.message, &labels) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if client.remote_enabled() && !client.log_target().is_empty() {
        tokio::time::sleep(Duration::from_millis(cli.wait_ms)).await;
    }

    Ok(())
}
