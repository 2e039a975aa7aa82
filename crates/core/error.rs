//! Error types for the route guide core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteGuideError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid feature database {path}: {reason}")]
    InvalidDatabase { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RouteGuideError>;
