//! Session runner.

use crate::error::AppResult;
use inkmark_core::{Canvas, CanvasConfig, CanvasEvent, RenderFrame, events_from_json};
use serde::Serialize;
use std::path::Path;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "INKMARK_CONFIG";

/// Outcome of replaying a script.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// Events that changed state.
    pub applied: usize,
    /// Events that were soft no-ops.
    pub ignored: usize,
    /// Undo depth at the end of the session.
    pub undo_depth: usize,
    /// Redo depth at the end of the session.
    pub redo_depth: usize,
    /// Scene after the last event.
    pub frame: RenderFrame,
}

/// Element index an event addresses, if any.
fn target_index(event: &CanvasEvent) -> Option<usize> {
    match event {
        CanvasEvent::ElementClicked { index }
        | CanvasEvent::ElementDragged { index, .. }
        | CanvasEvent::TransformEnded { index, .. } => Some(*index),
        _ => None,
    }
}

/// Owns one canvas session for the lifetime of the process.
pub struct App {
    canvas: Canvas,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an application with default configuration.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create an application with custom configuration.
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            canvas: Canvas::with_config(config),
        }
    }

    /// Configuration from `explicit`, else from [`CONFIG_ENV_VAR`], else defaults.
    pub fn load_config(explicit: Option<&Path>) -> AppResult<CanvasConfig> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR);
        let path = explicit.or(from_env.as_deref().map(Path::new));
        match path {
            Some(path) => {
                log::info!("Using configuration {:?}", path);
                Ok(CanvasConfig::load(path)?)
            }
            None => Ok(CanvasConfig::default()),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Feed events in order and summarize the result.
    pub fn replay(&mut self, events: Vec<CanvasEvent>) -> SessionReport {
        let mut applied = 0;
        let mut ignored = 0;
        for event in events {
            let len = self.canvas.document().len();
            if let Some(index) = target_index(&event).filter(|&index| index >= len) {
                log::warn!("Skipping {:?}: no element at index {}", event, index);
                ignored += 1;
                continue;
            }
            if self.canvas.handle_event(event) {
                applied += 1;
            } else {
                ignored += 1;
            }
        }
        log::info!("Replayed session: {} applied, {} ignored", applied, ignored);

        SessionReport {
            applied,
            ignored,
            undo_depth: self.canvas.history().past().len(),
            redo_depth: self.canvas.history().future_len(),
            frame: self.canvas.frame(),
        }
    }

    /// Read a JSON event script from disk and replay it.
    pub fn replay_file(&mut self, path: impl AsRef<Path>) -> AppResult<SessionReport> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let events = events_from_json(&json)?;
        log::debug!("Loaded {} events from {:?}", events.len(), path.as_ref());
        Ok(self.replay(events))
    }
}
