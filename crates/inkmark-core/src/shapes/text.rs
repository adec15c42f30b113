//! Text element.

use super::{ElementId, ElementStyle, ElementTrait, SerializableColor};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content given to text created with the text tool.
pub const DEFAULT_TEXT: &str = "New Text";
/// Default font size in stage units.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;

/// Average glyph advance relative to font size, used for approximate bounds.
const GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// A single-line text label anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: ElementId,
    /// Top-left position.
    pub position: Point,
    /// Text content.
    pub content: String,
    /// Font size.
    pub font_size: f64,
    /// Style properties. Text is drawn with the fill color.
    pub style: ElementStyle,
}

impl Text {
    /// Create a new text element.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size: DEFAULT_FONT_SIZE,
            style: ElementStyle {
                stroke_color: SerializableColor::transparent(),
                stroke_width: 0.0,
                fill_color: Some(SerializableColor::black()),
                draggable: true,
            },
        }
    }
}

impl ElementTrait for Text {
    fn id(&self) -> ElementId {
        self.id
    }

    // No font metrics in the core; the renderer knows the real extent.
    fn bounds(&self) -> Rect {
        let width = self.content.chars().count() as f64 * self.font_size * GLYPH_WIDTH_FACTOR;
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + self.font_size,
        )
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }
}
