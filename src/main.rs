use clap::Parser;
use globefacts::core::config::{self, CliOverrides, FactsConfig};
use globefacts::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "globefacts", about = "Look up countries and their facts from the terminal")]
struct Args {
    /// Base URL of the country service
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Search term to run at startup
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to globefacts.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("globefacts.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        FactsConfig::default()
    });

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            timeout_secs: args.timeout,
            query: args.query,
        },
    );

    log::info!(
        "globefacts starting up against {} (timeout {:?})",
        resolved.base_url,
        resolved.timeout
    );

    tui::run(resolved)
}
