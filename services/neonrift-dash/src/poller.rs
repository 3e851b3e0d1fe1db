//! Health and info pollers
//!
//! A poller issues one GET and renders its outcome. Neither retries nor
//! imposes a timeout of its own.

use async_trait::async_trait;

use crate::fetch::FetchAdapter;
use crate::view::{Badge, ViewHandle};

/// Poll the health endpoint into the badge and health panel.
///
/// The badge shows `loading...` until the response arrives. A transport
/// failure is returned to the caller and leaves the panel untouched.
pub async fn refresh_health(
    fetch: &FetchAdapter,
    path: &str,
    view: &ViewHandle,
) -> crate::Result<()> {
    view.set_health_badge(Badge::Loading);
    let result = fetch.fetch_json(path).await?;

    let badge = if result.ok && result.json.is_some() {
        Badge::Ok
    } else {
        Badge::Err(result.status)
    };
    tracing::debug!("Health: {}", badge);

    view.set_health_badge(badge);
    view.set_health_out(result.display_body());
    Ok(())
}

/// Poll the info endpoint into the info panel, whatever the status code
pub async fn refresh_info(
    fetch: &FetchAdapter,
    path: &str,
    view: &ViewHandle,
) -> crate::Result<()> {
    let result = fetch.fetch_json(path).await?;
    tracing::debug!("Info: status={}", result.status);
    view.set_info_out(result.display_body());
    Ok(())
}

/// Action run on every auto-refresh tick
#[async_trait]
pub trait RefreshAction: Send + Sync {
    async fn run(&self);
}

/// The Info Poller as a periodic action; transport failures are logged
#[derive(Debug, Clone)]
pub struct InfoPoller {
    fetch: FetchAdapter,
    path: String,
    view: ViewHandle,
}

impl InfoPoller {
    pub fn new(fetch: FetchAdapter, path: impl Into<String>, view: ViewHandle) -> Self {
        Self {
            fetch,
            path: path.into(),
            view,
        }
    }
}

#[async_trait]
impl RefreshAction for InfoPoller {
    async fn run(&self) {
        if let Err(e) = refresh_info(&self.fetch, &self.path, &self.view).await {
            tracing::warn!("Info refresh failed: {}", e);
        }
    }
}
