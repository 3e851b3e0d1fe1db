//! Simulated neonrift device serving `/health` and `/info`
//!
//! Mirrors a real device's JSON shapes and headers so the dashboard can be
//! exercised without hardware.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

/// Body of `GET /health` on a healthy device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub ok: bool,
    pub status: String,
    pub ts_ms: u64,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub ok: bool,
    pub error: String,
}

/// Network section of `GET /info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WifiInfo {
    pub mode: i32,
    pub status: i32,
    pub ssid: String,
    pub rssi: i32,
    pub ip: String,
    pub gateway: String,
    pub subnet: String,
    pub mac: String,
}

/// Body of `GET /info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub ok: bool,
    pub chip_id: String,
    pub sdk: String,
    pub cpu_freq_mhz: u32,
    pub sketch_size: u32,
    pub free_sketch_space: u32,
    pub uptime_ms: u64,
    pub uptime_s: u64,
    pub heap_free: u32,
    pub heap_min_free: u32,
    pub heap_max_alloc: u32,
    pub psram_size: u32,
    pub psram_free: u32,
    pub flash_size: u32,
    pub reset_reason: i32,
    pub wifi: WifiInfo,
}

/// How `/health` answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthBehavior {
    Healthy,
    /// JSON error body with the given status
    Failing { status: u16, reason: String },
    /// Non-JSON body with the given status
    PlainText { status: u16, body: String },
}

#[derive(Debug)]
struct DeviceInner {
    chip_id: String,
    started_at: Instant,
    health: RwLock<HealthBehavior>,
    info_requests: AtomicU64,
}

/// Shared state of the simulated device
#[derive(Debug, Clone)]
pub struct DeviceState {
    inner: Arc<DeviceInner>,
}

impl DeviceState {
    pub fn new(chip_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(DeviceInner {
                chip_id: chip_id.into(),
                started_at: Instant::now(),
                health: RwLock::new(HealthBehavior::Healthy),
                info_requests: AtomicU64::new(0),
            }),
        }
    }

    pub async fn set_health(&self, behavior: HealthBehavior) {
        tracing::debug!("Device health behavior: {:?}", behavior);
        *self.inner.health.write().await = behavior;
    }

    /// Number of `/info` requests served so far
    pub fn info_requests(&self) -> u64 {
        self.inner.info_requests.load(Ordering::SeqCst)
    }

    fn uptime_ms(&self) -> u64 {
        self.inner.started_at.elapsed().as_millis() as u64
    }

    fn info(&self) -> DeviceInfo {
        let uptime_ms = self.uptime_ms();
        DeviceInfo {
            ok: true,
            chip_id: self.inner.chip_id.clone(),
            sdk: "mock".to_string(),
            cpu_freq_mhz: 240,
            sketch_size: 912_384,
            free_sketch_space: 1_310_720,
            uptime_ms,
            uptime_s: uptime_ms / 1000,
            heap_free: 214_532,
            heap_min_free: 198_200,
            heap_max_alloc: 110_580,
            psram_size: 0,
            psram_free: 0,
            flash_size: 4_194_304,
            reset_reason: 1,
            wifi: WifiInfo {
                mode: 1,
                status: 3,
                ssid: "mock-ssid".to_string(),
                rssi: -52,
                ip: "127.0.0.1".to_string(),
                gateway: "127.0.0.1".to_string(),
                subnet: "255.0.0.0".to_string(),
                mac: "02:00:00:00:00:01".to_string(),
            },
        }
    }
}

/// Build the device router
pub fn build_router(state: DeviceState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .with_state(state)
}

/// Serve the device on `listener` until `cancel` fires
pub async fn serve(
    listener: TcpListener,
    state: DeviceState,
    cancel: CancellationToken,
) -> crate::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Mock device listening on http://{}", addr);
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::debug!("Mock device stopped");
    Ok(())
}

fn send_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "application/json; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        Json(body),
    )
        .into_response()
}

fn send_error(status: StatusCode, message: &str) -> Response {
    send_json(
        status,
        &ErrorReport {
            ok: false,
            error: message.to_string(),
        },
    )
}

async fn health_handler(State(device): State<DeviceState>) -> Response {
    let behavior = device.inner.health.read().await.clone();
    match behavior {
        HealthBehavior::Healthy => send_json(
            StatusCode::OK,
            &HealthReport {
                ok: true,
                status: "ok".to_string(),
                ts_ms: device.uptime_ms(),
            },
        ),
        HealthBehavior::Failing { status, reason } => send_error(
            StatusCode::from_u16(status).unwrap_or(StatusCode::SERVICE_UNAVAILABLE),
            &reason,
        ),
        HealthBehavior::PlainText { status, body } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::SERVICE_UNAVAILABLE),
            [(header::CACHE_CONTROL, "no-store")],
            body,
        )
            .into_response(),
    }
}

async fn info_handler(State(device): State<DeviceState>) -> Response {
    device.inner.info_requests.fetch_add(1, Ordering::SeqCst);
    send_json(StatusCode::OK, &device.info())
}

async fn not_found_handler() -> Response {
    send_error(StatusCode::NOT_FOUND, "not_found")
}
