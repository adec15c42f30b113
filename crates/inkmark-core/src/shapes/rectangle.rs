//! Rectangle element.

use super::{ElementId, ElementStyle, ElementTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle anchored at its origin.
///
/// Width and height are signed: dragging up or left of the origin while
/// drawing produces negative extents, which are only normalized in
/// [`ElementTrait::bounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: ElementId,
    /// Origin (the corner where drawing started).
    pub position: Point,
    /// Signed width.
    pub width: f64,
    /// Signed height.
    pub height: f64,
    /// Style properties.
    pub style: ElementStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            style: ElementStyle::default(),
        }
    }

    /// The corner opposite the origin.
    pub fn far_corner(&self) -> Point {
        Point::new(self.position.x + self.width, self.position.y + self.height)
    }
}

impl ElementTrait for Rectangle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.position, self.far_corner())
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }
}
