//! Dashboard bindings: buttons, startup polls and the auto-refresh toggle

use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::auto_refresh::{AutoRefreshContext, AutoRefreshController};
use crate::config::Config;
use crate::fetch::FetchAdapter;
use crate::io::HttpClient;
use crate::poller::{refresh_health, refresh_info, InfoPoller};
use crate::view::{new_view_handle, ViewHandle};

/// A button press or key command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Health,
    Info,
    ToggleAuto,
    Quit,
}

impl FromStr for Command {
    type Err = crate::DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "health" => Ok(Command::Health),
            "i" | "info" => Ok(Command::Info),
            "a" | "auto" => Ok(Command::ToggleAuto),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(crate::DashError::UnknownCommand(other.to_string())),
        }
    }
}

/// The page: pollers, controller and the surface they render into
#[derive(Debug)]
pub struct Dashboard {
    fetch: FetchAdapter,
    health_path: String,
    info_path: String,
    view: ViewHandle,
    auto: Mutex<AutoRefreshController>,
}

impl Dashboard {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> crate::Result<Self> {
        config.validate()?;

        let fetch = FetchAdapter::new(config.device.base_url.clone(), http);
        let view = new_view_handle();

        let info_poller = InfoPoller::new(
            fetch.clone(),
            config.device.info_path.clone(),
            Arc::clone(&view),
        );
        let auto = AutoRefreshController::new(AutoRefreshContext {
            interval: config.auto_refresh.interval(),
            action: Arc::new(info_poller),
            view: Arc::clone(&view),
        });

        tracing::debug!("Dashboard bound to {}", fetch.base_url());

        Ok(Self {
            fetch,
            health_path: config.device.health_path.clone(),
            info_path: config.device.info_path.clone(),
            view,
            auto: Mutex::new(auto),
        })
    }

    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    /// Initial load: one health poll and one info poll, side by side
    pub async fn start(&self) {
        tracing::debug!("Initial load");
        tokio::join!(self.on_health_clicked(), self.on_info_clicked());
    }

    pub async fn on_health_clicked(&self) {
        if let Err(e) = refresh_health(&self.fetch, &self.health_path, &self.view).await {
            tracing::warn!("Health refresh failed: {}", e);
        }
    }

    pub async fn on_info_clicked(&self) {
        if let Err(e) = refresh_info(&self.fetch, &self.info_path, &self.view).await {
            tracing::warn!("Info refresh failed: {}", e);
        }
    }

    pub async fn on_auto_clicked(&self) {
        self.auto.lock().await.toggle();
    }

    pub async fn set_auto_refresh(&self, enabled: bool) {
        self.auto.lock().await.set(enabled);
    }

    pub async fn is_auto_refresh_enabled(&self) -> bool {
        self.auto.lock().await.is_enabled()
    }

    pub async fn has_auto_refresh_timer(&self) -> bool {
        self.auto.lock().await.has_timer()
    }

    /// Run a command. Returns false once the dashboard should close.
    ///
    /// Refreshes are spawned so a slow device never blocks further input;
    /// toggles apply in order.
    pub async fn dispatch(self: &Arc<Self>, command: Command) -> bool {
        tracing::debug!("Command: {:?}", command);
        match command {
            Command::Health => {
                let dashboard = Arc::clone(self);
                tokio::spawn(async move { dashboard.on_health_clicked().await });
            }
            Command::Info => {
                let dashboard = Arc::clone(self);
                tokio::spawn(async move { dashboard.on_info_clicked().await });
            }
            Command::ToggleAuto => self.on_auto_clicked().await,
            Command::Quit => return false,
        }
        true
    }

    /// Stop auto-refresh; in-flight polls are left to finish
    pub async fn shutdown(&self) {
        self.auto.lock().await.shutdown();
    }
}
