//! Session configuration.

use crate::error::{CanvasError, CanvasResult};
use crate::shapes::SerializableColor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image drawn underneath the elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// URL or path the rendering surface loads the image from.
    pub source: String,
    pub width: f64,
    pub height: f64,
}

impl Default for BackgroundImage {
    fn default() -> Self {
        Self {
            source: "https://via.placeholder.com/600x400".to_string(),
            width: 600.0,
            height: 400.0,
        }
    }
}

/// Configuration for a [`crate::canvas::Canvas`] session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Stage width in stage units.
    pub stage_width: f64,
    /// Stage height in stage units.
    pub stage_height: f64,
    /// Background image, if any.
    pub background: Option<BackgroundImage>,
    /// Color substituted into the selected element's paint.
    pub highlight_color: SerializableColor,
    /// Maximum number of undo states to keep (None = unbounded).
    pub max_undo_history: Option<usize>,
    /// Whether loading the fixture records a history entry.
    pub undoable_fixture_load: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            stage_width: 600.0,
            stage_height: 400.0,
            background: Some(BackgroundImage::default()),
            highlight_color: SerializableColor::yellow(),
            max_undo_history: None,
            undoable_fixture_load: false,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded configuration from {:?}", path.as_ref());
        Self::from_json(&json)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the values describe a usable stage.
    pub fn validate(&self) -> CanvasResult<()> {
        if !(self.stage_width > 0.0 && self.stage_height > 0.0) {
            return Err(CanvasError::InvalidConfig(format!(
                "stage size must be positive, got {}x{}",
                self.stage_width, self.stage_height
            )));
        }
        if self.max_undo_history == Some(0) {
            return Err(CanvasError::InvalidConfig(
                "max_undo_history must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
