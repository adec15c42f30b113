//! InkMark Core Library
//!
//! Shape-editing state for an annotation surface: the element model, linear
//! undo/redo history, the draw gesture and selection/transform handling.
//! Painting and hit-testing belong to the rendering surface, which talks to
//! this crate through [`CanvasEvent`] and [`RenderFrame`].

pub mod canvas;
pub mod config;
pub mod error;
pub mod fixture;
pub mod history;
pub mod input;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::{Canvas, ElementCollection};
pub use config::{BackgroundImage, CanvasConfig};
pub use error::{CanvasError, CanvasResult};
pub use history::History;
pub use input::{CanvasEvent, events_from_json};
pub use render::{CommandAvailability, RenderFrame, RenderItem};
pub use selection::{HandleReport, Selection};
pub use shapes::{Element, ElementId, ElementKind, ElementStyle};
pub use tools::{Draft, ToolKind, ToolManager};
