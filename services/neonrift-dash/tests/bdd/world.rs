//! BDD test world for the neonrift dashboard

use std::net::SocketAddr;
use std::sync::Arc;

use cucumber::World;
use neonrift_dash::config::Config;
use neonrift_dash::device::{self, DeviceState};
use neonrift_dash::io::ReqwestHttpClient;
use neonrift_dash::Dashboard;
use tokio_util::sync::CancellationToken;

/// A mock device served on an ephemeral port for the life of a scenario
#[derive(Debug)]
pub struct MockDevice {
    pub addr: SocketAddr,
    pub state: DeviceState,
    cancel: CancellationToken,
}

impl MockDevice {
    pub async fn start(chip_id: &str) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock device");
        let addr = listener.local_addr().expect("mock device address");
        let state = DeviceState::new(chip_id);
        let cancel = CancellationToken::new();

        let serve_state = state.clone();
        let serve_cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = device::serve(listener, serve_state, serve_cancel).await {
                panic!("mock device failed: {}", e);
            }
        });

        Self {
            addr,
            state,
            cancel,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[derive(Debug, Default, World)]
pub struct DashWorld {
    pub device: Option<MockDevice>,
    pub base_url: Option<String>,
    pub interval_ms: Option<u64>,
    pub dashboard: Option<Arc<Dashboard>>,
}

impl DashWorld {
    /// The dashboard under test, built on first use from the scenario setup
    pub fn dashboard(&mut self) -> Arc<Dashboard> {
        if let Some(dashboard) = &self.dashboard {
            return Arc::clone(dashboard);
        }

        let mut config = Config::default();
        if let Some(base_url) = &self.base_url {
            config.device.base_url = base_url.clone();
        } else if let Some(device) = &self.device {
            config.device.base_url = device.base_url();
        }
        if let Some(interval_ms) = self.interval_ms {
            config.auto_refresh.interval_ms = interval_ms;
        }

        let dashboard = Arc::new(
            Dashboard::new(&config, Arc::new(ReqwestHttpClient::default()))
                .expect("valid dashboard config"),
        );
        self.dashboard = Some(Arc::clone(&dashboard));
        dashboard
    }

    pub fn device(&self) -> &MockDevice {
        self.device.as_ref().expect("mock device not started")
    }
}
