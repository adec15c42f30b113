//! Element definitions for the annotation surface.

mod arrow;
mod circle;
mod rectangle;
mod text;

pub use arrow::Arrow;
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use text::{DEFAULT_FONT_SIZE, DEFAULT_TEXT, Text};

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    /// CSS `green`, which is half intensity.
    pub fn green() -> Self {
        Self::new(0, 128, 0, 255)
    }

    pub fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }

    pub fn yellow() -> Self {
        Self::new(255, 255, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties shared by every element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Stroke color. Arrows also use it as their head fill.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill, used by arrows).
    pub fill_color: Option<SerializableColor>,
    /// Whether the rendering surface may drag the element.
    #[serde(default = "default_draggable")]
    pub draggable: bool,
}

fn default_draggable() -> bool {
    true
}

impl ElementStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: Some(SerializableColor::transparent()),
            draggable: true,
        }
    }
}

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Common trait for all element variants.
pub trait ElementTrait {
    /// Get the unique identifier.
    fn id(&self) -> ElementId;

    /// Get the bounding box, normalized so that `x0 <= x1` and `y0 <= y1`.
    fn bounds(&self) -> Rect;

    /// Get the style.
    fn style(&self) -> &ElementStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ElementStyle;
}

/// Discriminant of an [`Element`] without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Rectangle,
    Circle,
    Arrow,
    Text,
}

/// Tagged union of all element variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Rectangle(Rectangle),
    Circle(Circle),
    Arrow(Arrow),
    Text(Text),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Rectangle(e) => e.id(),
            Element::Circle(e) => e.id(),
            Element::Arrow(e) => e.id(),
            Element::Text(e) => e.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Circle(_) => ElementKind::Circle,
            Element::Arrow(_) => ElementKind::Arrow,
            Element::Text(_) => ElementKind::Text,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Element::Rectangle(e) => e.bounds(),
            Element::Circle(e) => e.bounds(),
            Element::Arrow(e) => e.bounds(),
            Element::Text(e) => e.bounds(),
        }
    }

    pub fn style(&self) -> &ElementStyle {
        match self {
            Element::Rectangle(e) => e.style(),
            Element::Circle(e) => e.style(),
            Element::Arrow(e) => e.style(),
            Element::Text(e) => e.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ElementStyle {
        match self {
            Element::Rectangle(e) => e.style_mut(),
            Element::Circle(e) => e.style_mut(),
            Element::Arrow(e) => e.style_mut(),
            Element::Text(e) => e.style_mut(),
        }
    }

    /// The single origin-style position of the element.
    ///
    /// Rectangles and text report their top-left origin, circles their center.
    /// Arrows have no single position (their geometry is the endpoint pair).
    pub fn position(&self) -> Option<Point> {
        match self {
            Element::Rectangle(r) => Some(r.position),
            Element::Circle(c) => Some(c.center),
            Element::Text(t) => Some(t.position),
            Element::Arrow(_) => None,
        }
    }

    /// Return a copy with the position replaced, or `None` for arrows.
    pub fn with_position(&self, position: Point) -> Option<Element> {
        let mut moved = self.clone();
        match &mut moved {
            Element::Rectangle(r) => r.position = position,
            Element::Circle(c) => c.center = position,
            Element::Text(t) => t.position = position,
            Element::Arrow(_) => return None,
        }
        Some(moved)
    }
}
