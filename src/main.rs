use anyhow::Result;
use clap::Parser;
use tracing::info;

use vod_sources::config::AppConfig;
use vod_sources::pipeline;
use vod_sources::report::print_summary;
use vod_sources::utils::logger::init_logger;

/// Video source extraction and comparison tool
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Enable debug mode: verbose console logs plus a diagnostic log file
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    init_logger(cli.debug, &config.debug_log_file)?;
    info!("Starting with {:?}", config);

    let summary = pipeline::run(&config).await?;
    print_summary(&summary);

    Ok(())
}
