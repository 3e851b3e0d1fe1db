//! Page surface: the text of every bound element
//!
//! Each field has exactly one writer. The Health Poller owns the badge and
//! health panel, the Info Poller owns the info panel, and the auto-refresh
//! controller owns the toggle label, its inactive style and the note.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// Stable identifiers of the bound page elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementId {
    HealthBadge,
    HealthOut,
    InfoOut,
    BtnHealth,
    BtnInfo,
    BtnAuto,
    AutoNote,
}

impl ElementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::HealthBadge => "healthBadge",
            ElementId::HealthOut => "healthOut",
            ElementId::InfoOut => "infoOut",
            ElementId::BtnHealth => "btnHealth",
            ElementId::BtnInfo => "btnInfo",
            ElementId::BtnAuto => "btnAuto",
            ElementId::AutoNote => "autoNote",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health badge indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Loading,
    Ok,
    Err(u16),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Loading => write!(f, "loading..."),
            Badge::Ok => write!(f, "ok"),
            Badge::Err(status) => write!(f, "err {}", status),
        }
    }
}

/// Snapshot of everything the page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub health_badge: String,
    pub health_out: String,
    pub info_out: String,
    pub auto_label: String,
    /// Secondary style on the toggle button, applied only while off
    pub auto_inactive: bool,
    pub auto_note: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            health_badge: String::new(),
            health_out: String::new(),
            info_out: String::new(),
            auto_label: auto_label(false),
            auto_inactive: true,
            auto_note: String::new(),
        }
    }
}

impl ViewState {
    /// Text content of a bound element
    pub fn text(&self, id: ElementId) -> &str {
        match id {
            ElementId::HealthBadge => &self.health_badge,
            ElementId::HealthOut => &self.health_out,
            ElementId::InfoOut => &self.info_out,
            ElementId::BtnHealth => "Health",
            ElementId::BtnInfo => "Info",
            ElementId::BtnAuto => &self.auto_label,
            ElementId::AutoNote => &self.auto_note,
        }
    }
}

/// Label of the auto-refresh toggle button
pub fn auto_label(enabled: bool) -> String {
    format!("Auto refresh: {}", if enabled { "on" } else { "off" })
}

/// Observable page surface.
///
/// Writers mutate through the typed setters; readers take snapshots or
/// subscribe to be woken on every change.
#[derive(Debug)]
pub struct View {
    tx: watch::Sender<ViewState>,
}

/// Shared page surface handle
pub type ViewHandle = Arc<View>;

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::default());
        Self { tx }
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    pub fn set_health_badge(&self, badge: Badge) {
        self.tx.send_modify(|s| s.health_badge = badge.to_string());
    }

    pub fn set_health_out(&self, text: String) {
        self.tx.send_modify(|s| s.health_out = text);
    }

    pub fn set_info_out(&self, text: String) {
        self.tx.send_modify(|s| s.info_out = text);
    }

    /// Reflect the auto-refresh state on the toggle button and note
    pub fn set_auto(&self, enabled: bool, note: String) {
        self.tx.send_modify(|s| {
            s.auto_label = auto_label(enabled);
            s.auto_inactive = !enabled;
            s.auto_note = note;
        });
    }
}

pub fn new_view_handle() -> ViewHandle {
    Arc::new(View::new())
}
