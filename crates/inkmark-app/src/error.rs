//! Application errors.

use inkmark_core::CanvasError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Usage: {0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;
