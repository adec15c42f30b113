//! Error types for the core library.

use thiserror::Error;

/// Errors raised while loading or saving canvas data.
///
/// Editing operations never fail; see [`crate::canvas::Canvas`] for the
/// soft no-op cases they report through their return values.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for canvas I/O.
pub type CanvasResult<T> = Result<T, CanvasError>;
