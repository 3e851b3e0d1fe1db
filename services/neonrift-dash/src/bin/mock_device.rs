//! Mock neonrift device for local runs and tests
//!
//! Usage:
//!   mock_device [--port PORT] [--chip-id ID] [--unhealthy REASON]
//!
//! Serves `/health` and `/info` with the same JSON shapes as a real device.

use clap::Parser;
use neonrift_dash::device::{self, DeviceState, HealthBehavior};
use tokio_util::sync::CancellationToken;
use tracing::Level;

#[derive(Parser)]
#[command(name = "mock_device")]
#[command(about = "Simulated neonrift device")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Chip id reported by /info
    #[arg(long, default_value = "0000A1B2C3D4E5F6")]
    chip_id: String,

    /// Answer /health with 503 and this reason
    #[arg(long)]
    unhealthy: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let state = DeviceState::new(args.chip_id);
    if let Some(reason) = args.unhealthy {
        state
            .set_health(HealthBehavior::Failing {
                status: 503,
                reason,
            })
            .await;
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;

    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
        }
        cancel_for_signal.cancel();
    });

    device::serve(listener, state, cancel).await?;
    Ok(())
}
