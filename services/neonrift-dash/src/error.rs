//! Error types for the neonrift dashboard

/// Errors that can occur in the dashboard
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;
