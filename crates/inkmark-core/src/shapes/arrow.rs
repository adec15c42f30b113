//! Arrow element.

use super::{ElementId, ElementStyle, ElementTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight arrow from `start` to `end`. Direction matters: the head is drawn at `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: ElementId,
    /// Start point.
    pub start: Point,
    /// End point (where the arrowhead points).
    pub end: Point,
    /// Style properties. The fill is unused; the head takes the stroke color.
    pub style: ElementStyle,
}

impl Arrow {
    /// Create a new arrow.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ElementStyle {
                fill_color: None,
                ..ElementStyle::default()
            },
        }
    }

    /// Create an arrow from a flat `[x1, y1, x2, y2]` endpoint list.
    pub fn from_points(points: [f64; 4]) -> Self {
        Self::new(Point::new(points[0], points[1]), Point::new(points[2], points[3]))
    }

    /// Endpoints as a flat `[x1, y1, x2, y2]` list.
    pub fn points(&self) -> [f64; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    /// Replace both endpoints from a flat list, keeping id and style.
    pub fn set_points(&mut self, points: [f64; 4]) {
        self.start = Point::new(points[0], points[1]);
        self.end = Point::new(points[2], points[3]);
    }

    /// Whether both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl ElementTrait for Arrow {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }
}
