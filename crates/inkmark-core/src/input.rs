//! Events reported by the rendering surface and the command buttons.

use crate::canvas::Canvas;
use crate::error::CanvasResult;
use crate::selection::HandleReport;
use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A single event, in stage coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// Pointer pressed on the stage background.
    PointerDown { position: Point },
    PointerMove { position: Point },
    /// Pointer released. The draft keeps the extent of the last move.
    PointerUp { position: Point },
    /// Click on a rendered element.
    ElementClicked { index: usize },
    /// Element dragged to a new position.
    ElementDragged { index: usize, position: Point },
    /// Resize gesture finished on an element.
    TransformEnded { index: usize, handle: HandleReport },
    SetTool { tool: ToolKind },
    Deselect,
    Undo,
    Redo,
    DeleteSelected,
    LoadFixture,
}

/// Parse a JSON array of events.
pub fn events_from_json(json: &str) -> CanvasResult<Vec<CanvasEvent>> {
    Ok(serde_json::from_str(json)?)
}

impl Canvas {
    /// Route one event to the matching operation.
    ///
    /// Returns false when the event was a soft no-op (nothing to undo,
    /// drawing while selected, and so on).
    pub fn handle_event(&mut self, event: CanvasEvent) -> bool {
        log::trace!("Handling {:?}", event);
        match event {
            CanvasEvent::PointerDown { position } => self.pointer_down(position),
            CanvasEvent::PointerMove { position } => self.pointer_move(position),
            CanvasEvent::PointerUp { .. } => self.pointer_up(),
            CanvasEvent::ElementClicked { index } => {
                self.select(index);
                true
            }
            CanvasEvent::ElementDragged { index, position } => self.drag_to(index, position),
            CanvasEvent::TransformEnded { index, mut handle } => {
                self.transform(index, &mut handle);
                true
            }
            CanvasEvent::SetTool { tool } => {
                self.set_tool(tool);
                true
            }
            CanvasEvent::Deselect => self.deselect(),
            CanvasEvent::Undo => self.undo(),
            CanvasEvent::Redo => self.redo(),
            CanvasEvent::DeleteSelected => self.delete_selected(),
            CanvasEvent::LoadFixture => {
                self.load_fixture();
                true
            }
        }
    }
}
