//! neonrift-dash CLI
//!
//! Terminal status dashboard for a neonrift device.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use neonrift_dash::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "neonrift-dash")]
#[command(about = "Status dashboard for a neonrift device")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Device base URL (overrides config file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.device.base_url = base_url;
    }

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(neonrift_dash::run(config));
    // A pending stdin read holds a blocking thread; don't wait on it
    rt.shutdown_timeout(Duration::from_millis(100));

    result?;
    Ok(())
}
