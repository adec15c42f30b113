//! Circle element.

use super::{ElementId, ElementStyle, ElementTrait};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A circle defined by its center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: ElementId,
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    #[serde(deserialize_with = "non_negative")]
    pub radius: f64,
    /// Style properties.
    pub style: ElementStyle,
}

fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(|radius| radius.max(0.0))
}

impl Circle {
    /// Create a new circle. Negative radii are clamped to zero.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: radius.max(0.0),
            style: ElementStyle::default(),
        }
    }

    /// Diameter, which is what a transform handle reports as width and height.
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

impl ElementTrait for Circle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(self.diameter(), self.diameter()))
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }
}
