//! Drawing tools and the in-flight draft they produce.

use crate::shapes::{
    Arrow, Circle, DEFAULT_TEXT, Element, ElementKind, ElementStyle, Rectangle,
    SerializableColor, Text,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    #[serde(alias = "rect")]
    Rectangle,
    Circle,
    Arrow,
    Text,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Rectangle,
            ToolKind::Circle,
            ToolKind::Arrow,
            ToolKind::Text,
        ]
    }

    /// Identifier used by the tool selector.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Arrow => "arrow",
            ToolKind::Text => "text",
        }
    }

    /// The element variant this tool draws.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            ToolKind::Rectangle => ElementKind::Rectangle,
            ToolKind::Circle => ElementKind::Circle,
            ToolKind::Arrow => ElementKind::Arrow,
            ToolKind::Text => ElementKind::Text,
        }
    }

    /// Style given to elements drawn with this tool.
    pub fn default_style(&self) -> ElementStyle {
        match self {
            ToolKind::Rectangle => ElementStyle {
                stroke_color: SerializableColor::red(),
                ..ElementStyle::default()
            },
            ToolKind::Circle => ElementStyle {
                stroke_color: SerializableColor::green(),
                ..ElementStyle::default()
            },
            ToolKind::Arrow => ElementStyle {
                stroke_color: SerializableColor::blue(),
                fill_color: None,
                ..ElementStyle::default()
            },
            ToolKind::Text => ElementStyle {
                stroke_color: SerializableColor::transparent(),
                stroke_width: 0.0,
                fill_color: Some(SerializableColor::black()),
                draggable: true,
            },
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown tool identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" | "rectangle" => Ok(ToolKind::Rectangle),
            "circle" => Ok(ToolKind::Circle),
            "arrow" => Ok(ToolKind::Arrow),
            "text" => Ok(ToolKind::Text),
            other => Err(UnknownTool(other.to_string())),
        }
    }
}

/// An uncommitted element being sized by a drag.
///
/// The anchor is where the gesture started; every [`Draft::grow`] recomputes
/// the extent from the anchor, never from the previous draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    anchor: Point,
    element: Element,
}

impl Draft {
    /// Start a zero-extent draft of the geometry implied by `tool` at `pointer`.
    pub fn new(tool: ToolKind, pointer: Point) -> Self {
        let style = tool.default_style();
        let element = match tool {
            ToolKind::Rectangle => {
                let mut rect = Rectangle::new(pointer, 0.0, 0.0);
                rect.style = style;
                Element::Rectangle(rect)
            }
            ToolKind::Circle => {
                let mut circle = Circle::new(pointer, 0.0);
                circle.style = style;
                Element::Circle(circle)
            }
            ToolKind::Arrow => {
                let mut arrow = Arrow::new(pointer, pointer);
                arrow.style = style;
                Element::Arrow(arrow)
            }
            ToolKind::Text => {
                let mut text = Text::new(pointer, DEFAULT_TEXT.to_string());
                text.style = style;
                Element::Text(text)
            }
        };
        Self {
            anchor: pointer,
            element,
        }
    }

    /// Return the draft resized towards `pointer`.
    pub fn grow(&self, pointer: Point) -> Self {
        let mut element = self.element.clone();
        match &mut element {
            Element::Rectangle(rect) => {
                rect.width = pointer.x - self.anchor.x;
                rect.height = pointer.y - self.anchor.y;
            }
            Element::Circle(circle) => {
                circle.radius = self.anchor.distance(pointer);
            }
            Element::Arrow(arrow) => {
                arrow.end = pointer;
            }
            // Text keeps its default size while the pointer moves.
            Element::Text(_) => {}
        }
        Self {
            anchor: self.anchor,
            element,
        }
    }

    /// Where the gesture started.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The element as it currently looks.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Finish the draft, yielding a committable element.
    pub fn into_element(self) -> Element {
        let mut element = self.element;
        element.style_mut().draggable = true;
        element
    }
}

/// State of the drawing gesture.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// A drag is sizing a draft.
    Drafting { draft: Draft },
}

/// Tracks the selected tool and the drawing gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Tool used for the next gesture.
    pub current_tool: ToolKind,
    /// Current state of the gesture.
    pub state: ToolState,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tool for the next gesture. A draft already in flight keeps its geometry.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    /// Begin a gesture at `point`, replacing any unfinished draft.
    pub fn begin(&mut self, point: Point) {
        self.state = ToolState::Drafting {
            draft: Draft::new(self.current_tool, point),
        };
    }

    /// Resize the draft towards `point`.
    /// Returns false when no gesture is in progress.
    pub fn update(&mut self, point: Point) -> bool {
        match &mut self.state {
            ToolState::Drafting { draft } => {
                *draft = draft.grow(point);
                true
            }
            ToolState::Idle => false,
        }
    }

    /// End the gesture and return the finished element.
    pub fn end(&mut self) -> Option<Element> {
        match std::mem::take(&mut self.state) {
            ToolState::Drafting { draft } => Some(draft.into_element()),
            ToolState::Idle => None,
        }
    }

    /// Abandon the gesture without producing an element.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = ToolState::Idle;
        was_active
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Drafting { .. })
    }

    /// The draft being sized, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            ToolState::Drafting { draft } => Some(draft),
            ToolState::Idle => None,
        }
    }
}
