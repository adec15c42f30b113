//! InkMark Application
//!
//! A headless stand-in for the rendering surface: it feeds recorded
//! events into a canvas session and reports the resulting frame.

mod app;
mod error;

pub use app::{App, CONFIG_ENV_VAR, SessionReport};
pub use error::{AppError, AppResult};
