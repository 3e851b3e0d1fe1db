//! neonrift-dash - status dashboard for a neonrift device
//!
//! Polls the device's `/health` and `/info` endpoints, renders the bodies
//! as text, and can re-poll `/info` on a fixed interval.

pub mod auto_refresh;
pub mod config;
pub mod dashboard;
pub mod device;
pub mod error;
pub mod fetch;
pub mod io;
pub mod poller;
pub mod terminal;
pub mod view;

pub use config::{load_config, Config};
pub use dashboard::{Command, Dashboard};
pub use error::{DashError, Result};
pub use fetch::{FetchAdapter, FetchResult};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::io::ReqwestHttpClient;

/// Run the terminal dashboard against the configured device
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let dashboard = Arc::new(Dashboard::new(&config, http)?);
    let cancel = CancellationToken::new();

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                cancel_for_signal.cancel();
            }
            Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
        }
    });

    tracing::info!("Dashboard started for {}", config.device.base_url);

    let initial = Arc::clone(&dashboard);
    tokio::spawn(async move {
        initial.start().await;
    });

    let result = terminal::run(Arc::clone(&dashboard), cancel).await;

    dashboard.shutdown().await;
    tracing::info!("Dashboard stopped");
    result
}
