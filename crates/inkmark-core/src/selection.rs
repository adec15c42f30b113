//! Selection state and transform-handle reconciliation.

use crate::shapes::Element;
use serde::{Deserialize, Serialize};

/// The single selected element, addressed by its index in the collection.
///
/// While an index is selected the transform handle is bound to it; the
/// rendering surface owns the handle itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `index`, rebinding the transform handle to it.
    pub fn select(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Clear the selection and unbind the handle.
    /// Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.index.take().is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Index the transform handle is bound to.
    pub fn handle_target(&self) -> Option<usize> {
        self.index
    }
}

/// Raw state of a transform handle at the end of a resize gesture.
///
/// `width`/`height` are the node's unscaled extent and `scale_x`/`scale_y`
/// the factors the handle applied on top. Arrows report their endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleReport {
    pub width: f64,
    pub height: f64,
    #[serde(default = "identity_scale")]
    pub scale_x: f64,
    #[serde(default = "identity_scale")]
    pub scale_y: f64,
    #[serde(default)]
    pub points: Option<[f64; 4]>,
}

fn identity_scale() -> f64 {
    1.0
}

impl HandleReport {
    /// A report for a box-shaped node.
    pub fn sized(width: f64, height: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            width,
            height,
            scale_x,
            scale_y,
            points: None,
        }
    }

    /// A report for an arrow node.
    pub fn with_points(points: [f64; 4]) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            points: Some(points),
        }
    }

    pub fn has_identity_scale(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0
    }

    /// Reset the scale factors so stored geometry alone defines size.
    pub fn reset_scale(&mut self) {
        self.scale_x = 1.0;
        self.scale_y = 1.0;
    }
}

/// Fold a finished transform gesture into the element's geometry.
///
/// Rectangles take the scaled extent, circles stay regular using the larger
/// reported side, and arrows take the reported endpoints verbatim. Text is
/// not transformable and comes back unchanged. For rectangles and circles
/// the report's scale is reset to identity.
pub fn reconcile_transform(element: &Element, report: &mut HandleReport) -> Element {
    let mut updated = element.clone();
    match &mut updated {
        Element::Rectangle(rect) => {
            rect.width = report.width * report.scale_x;
            rect.height = report.height * report.scale_y;
            report.reset_scale();
        }
        Element::Circle(circle) => {
            circle.radius = (report.width.max(report.height) / 2.0).max(0.0);
            report.reset_scale();
        }
        Element::Arrow(arrow) => match report.points {
            Some(points) => arrow.set_points(points),
            None => log::warn!("Transform report for arrow {} has no points", arrow.id),
        },
        Element::Text(_) => {}
    }
    updated
}
