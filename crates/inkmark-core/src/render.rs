//! Per-frame scene description for the rendering surface.

use crate::canvas::Canvas;
use crate::config::BackgroundImage;
use crate::shapes::{Element, ElementId, ElementKind, SerializableColor};
use kurbo::{Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// One element ready to paint, with highlight colors already substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    /// Index in the collection (None for the draft).
    pub index: Option<usize>,
    pub id: ElementId,
    /// Element with its effective paint.
    pub element: Element,
    /// Normalized bounds.
    pub bounds: Rect,
    pub selected: bool,
}

impl RenderItem {
    /// Effective stroke as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.element.style().stroke()
    }

    /// Effective fill as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.element.style().fill()
    }
}

/// Which outward commands are currently meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAvailability {
    pub undo: bool,
    pub redo: bool,
    pub delete: bool,
}

/// Everything the rendering surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub stage: Size,
    pub background: Option<BackgroundImage>,
    /// Committed elements, back to front.
    pub items: Vec<RenderItem>,
    /// The in-progress draft, drawn above everything else.
    pub draft: Option<RenderItem>,
    pub selected: Option<usize>,
    /// Index the transform handle should be attached to.
    pub transform_handle: Option<usize>,
    pub commands: CommandAvailability,
}

/// Copy of `element` painted in the highlight color.
///
/// Filled kinds swap their fill; arrows have no fill, so both their stroke
/// and head take the highlight.
pub fn highlighted(element: &Element, highlight: SerializableColor) -> Element {
    let mut painted = element.clone();
    let style = painted.style_mut();
    match element.kind() {
        ElementKind::Arrow => {
            style.stroke_color = highlight;
            style.fill_color = Some(highlight);
        }
        ElementKind::Rectangle | ElementKind::Circle | ElementKind::Text => {
            style.fill_color = Some(highlight);
        }
    }
    painted
}

impl Canvas {
    /// Build the scene for the current state.
    pub fn frame(&self) -> RenderFrame {
        let selected = self.selected_index();
        let highlight = self.config().highlight_color;

        let items = self
            .document()
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let is_selected = selected == Some(index);
                let element = if is_selected {
                    highlighted(element, highlight)
                } else {
                    element.clone()
                };
                RenderItem {
                    index: Some(index),
                    id: element.id(),
                    bounds: element.bounds(),
                    element,
                    selected: is_selected,
                }
            })
            .collect();

        let draft = self.draft().map(|draft| {
            let element = draft.element().clone();
            RenderItem {
                index: None,
                id: element.id(),
                bounds: element.bounds(),
                element,
                selected: false,
            }
        });

        RenderFrame {
            stage: Size::new(self.config().stage_width, self.config().stage_height),
            background: self.config().background.clone(),
            items,
            draft,
            selected,
            transform_handle: self.selection().handle_target(),
            commands: CommandAvailability {
                undo: self.can_undo(),
                redo: self.can_redo(),
                delete: self.can_delete(),
            },
        }
    }
}
