//! Seed collection standing in for previously saved widgets.

use crate::canvas::ElementCollection;
use crate::shapes::{Arrow, Circle, Element, Rectangle, Text};
use crate::tools::ToolKind;
use kurbo::Point;

/// The four saved widgets: one of each element kind at fixed coordinates.
pub fn saved_widgets() -> ElementCollection {
    let mut rect = Rectangle::new(Point::new(50.0, 50.0), 100.0, 80.0);
    rect.style = ToolKind::Rectangle.default_style();

    let mut circle = Circle::new(Point::new(200.0, 200.0), 50.0);
    circle.style = ToolKind::Circle.default_style();

    let mut arrow = Arrow::from_points([300.0, 300.0, 400.0, 400.0]);
    arrow.style = ToolKind::Arrow.default_style();

    let mut text = Text::new(Point::new(400.0, 100.0), "Sample Text".to_string());
    text.style = ToolKind::Text.default_style();

    ElementCollection::from_elements(vec![
        Element::Rectangle(rect),
        Element::Circle(circle),
        Element::Arrow(arrow),
        Element::Text(text),
    ])
}
