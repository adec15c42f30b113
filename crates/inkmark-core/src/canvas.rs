//! Element collection and the editing session that owns it.

use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::fixture;
use crate::history::History;
use crate::selection::{HandleReport, Selection, reconcile_transform};
use crate::shapes::{Element, ElementId};
use crate::tools::{Draft, ToolKind, ToolManager};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Ordered elements, back to front.
///
/// Position in the list is both the z-order and the index used for
/// selection. Indices are always dense: removing an element shifts every
/// later element down by one. Edits produce a new collection rather than
/// mutating in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementCollection {
    elements: Vec<Element>,
}

impl ElementCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Find the current index of an element by its ID.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Iterate elements in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// A copy with `element` added on top.
    pub fn with_appended(&self, element: Element) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element);
        Self { elements }
    }

    /// A copy with the element at `index` replaced.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn with_replaced(&self, index: usize, element: Element) -> Self {
        let mut elements = self.elements.clone();
        elements[index] = element;
        Self { elements }
    }

    /// A copy without the element at `index`; later elements shift down.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn without(&self, index: usize) -> Self {
        let mut elements = self.elements.clone();
        elements.remove(index);
        Self { elements }
    }

    /// Get the bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Serialize the collection to JSON.
    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a collection from JSON.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Element> for ElementCollection {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// One editing session: the collection, its history, the drawing tool and the selection.
///
/// Everything that changes the visible collection goes through a single
/// commit path so history and scene never diverge.
#[derive(Debug, Clone)]
pub struct Canvas {
    config: CanvasConfig,
    history: History,
    tool_manager: ToolManager,
    selection: Selection,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a canvas with an empty collection and default configuration.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create a canvas with a custom configuration.
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            history: History::with_max_depth(config.max_undo_history),
            config,
            tool_manager: ToolManager::new(),
            selection: Selection::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The committed collection.
    pub fn document(&self) -> &ElementCollection {
        self.history.present()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Index of the selected element, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Stable ID of the selected element, if any.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_element().map(Element::id)
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.index().and_then(|i| self.document().get(i))
    }

    /// The draft being drawn, if a gesture is in progress.
    pub fn draft(&self) -> Option<&Draft> {
        self.tool_manager.draft()
    }

    fn commit(&mut self, next: ElementCollection) {
        self.history.commit(next);
    }

    // --- Drawing ---

    /// Set the tool for the next drawing gesture.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool set to {}", tool);
        self.tool_manager.set_tool(tool);
    }

    /// Start drawing at `point`.
    /// Returns false (and draws nothing) while an element is selected.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if self.selection.is_active() {
            log::debug!("Pointer down ignored while an element is selected");
            return false;
        }
        self.tool_manager.begin(point);
        true
    }

    /// Resize the draft. Never touches history.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.tool_manager.update(point)
    }

    /// Commit the draft as a new topmost element.
    /// Returns false if no drawing gesture was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let Some(element) = self.tool_manager.end() else {
            return false;
        };
        log::debug!("Drew {:?} {}", element.kind(), element.id());
        let next = self.document().with_appended(element);
        self.commit(next);
        true
    }

    /// Drop the draft without committing it.
    pub fn cancel_draft(&mut self) -> bool {
        self.tool_manager.cancel()
    }

    // --- Selection and editing ---

    /// Select the element at `index` and bind the transform handle to it.
    /// A draft still in flight is discarded.
    ///
    /// # Panics
    /// Panics if `index` is not a valid index into the current collection;
    /// the rendering surface only reports clicks on elements it drew.
    pub fn select(&mut self, index: usize) {
        let element = self.element_at(index);
        log::info!("Selected {:?} at index {}: {}", element.kind(), index, element.id());
        if self.tool_manager.cancel() {
            log::debug!("Draft discarded by selection");
        }
        self.selection.select(index);
    }

    /// Clear the selection and unbind the transform handle.
    pub fn deselect(&mut self) -> bool {
        self.selection.clear()
    }

    /// Move the element at `index` to `position` and commit.
    ///
    /// Applies to rectangles, circles and text. Arrows are moved through
    /// [`Canvas::transform`]; dragging one, or an element that is not
    /// draggable, is ignored and returns false.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn drag_to(&mut self, index: usize, position: Point) -> bool {
        let element = self.element_at(index);
        if !element.style().draggable {
            log::debug!("Element {} is not draggable", element.id());
            return false;
        }
        let Some(moved) = element.with_position(position) else {
            log::debug!("Drag ignored for arrow {}", element.id());
            return false;
        };
        let next = self.document().with_replaced(index, moved);
        self.commit(next);
        true
    }

    /// Fold a finished resize gesture into the element at `index` and commit.
    ///
    /// On return the report's scale has been reset to identity for the
    /// element kinds whose size it carried.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn transform(&mut self, index: usize, report: &mut HandleReport) {
        let updated = reconcile_transform(self.element_at(index), report);
        let next = self.document().with_replaced(index, updated);
        self.commit(next);
    }

    /// Remove the selected element and commit.
    /// Returns false if nothing was selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(index) = self.selection.index() else {
            log::debug!("Nothing selected to delete");
            return false;
        };
        let next = self.document().without(index);
        self.commit(next);
        self.selection.clear();
        true
    }

    // --- History ---

    /// Undo the last commit. Always clears the selection when it succeeds.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.selection.clear();
        true
    }

    /// Redo the last undone commit. Always clears the selection when it succeeds.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.selection.clear();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn can_delete(&self) -> bool {
        self.selection.is_active()
    }

    // --- Loading ---

    /// Replace the collection with the saved-widgets fixture.
    ///
    /// Unrecorded unless [`CanvasConfig::undoable_fixture_load`] is set.
    /// The selection is cleared since its index may not exist in the new collection.
    pub fn load_fixture(&mut self) {
        self.load_document(fixture::saved_widgets());
    }

    /// Replace the collection wholesale, following the same rules as [`Canvas::load_fixture`].
    pub fn load_document(&mut self, collection: ElementCollection) {
        log::info!("Loading {} elements", collection.len());
        if self.config.undoable_fixture_load {
            self.commit(collection);
        } else {
            self.history.replace(collection);
        }
        self.selection.clear();
    }

    fn element_at(&self, index: usize) -> &Element {
        let len = self.document().len();
        assert!(index < len, "element index {index} out of range for {len} elements");
        &self.document().as_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, ElementKind, Rectangle, Text};

    fn draw(canvas: &mut Canvas, tool: ToolKind, from: Point, to: Point) {
        canvas.set_tool(tool);
        assert!(canvas.pointer_down(from));
        canvas.pointer_move(to);
        assert!(canvas.pointer_up());
    }

    fn rect_at(x: f64) -> Element {
        Element::Rectangle(Rectangle::new(Point::new(x, 0.0), 10.0, 10.0))
    }

    #[test]
    fn test_collection_without_repacks() {
        let elements: Vec<Element> = (0..5).map(|i| rect_at(i as f64)).collect();
        let collection = ElementCollection::from_elements(elements.clone());
        let removed = collection.without(2);

        assert_eq!(removed.len(), 4);
        assert_eq!(removed.get(0), Some(&elements[0]));
        assert_eq!(removed.get(1), Some(&elements[1]));
        assert_eq!(removed.get(2), Some(&elements[3]));
        assert_eq!(removed.get(3), Some(&elements[4]));
        // The source collection is untouched.
        assert_eq!(collection.len(), 5);
    }

    #[test]
    fn test_collection_index_of() {
        let a = rect_at(0.0);
        let b = rect_at(1.0);
        let collection = ElementCollection::from_elements(vec![a.clone(), b.clone()]);
        assert_eq!(collection.index_of(b.id()), Some(1));
        assert_eq!(collection.without(0).index_of(b.id()), Some(0));
        assert_eq!(collection.without(1).index_of(b.id()), None);
    }

    #[test]
    fn test_collection_json_roundtrip() {
        let collection = fixture::saved_widgets();
        let json = collection.to_json().unwrap();
        assert_eq!(ElementCollection::from_json(&json).unwrap(), collection);
    }

    #[test]
    fn test_collection_bounds() {
        assert!(ElementCollection::new().bounds().is_none());
        let bounds = fixture::saved_widgets().bounds().unwrap();
        assert!((bounds.x0 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_rectangle_scenario() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        assert!(canvas.pointer_down(Point::new(50.0, 50.0)));
        assert!(canvas.pointer_move(Point::new(150.0, 120.0)));
        assert!(canvas.document().is_empty());
        assert!(canvas.pointer_up());

        assert_eq!(canvas.document().len(), 1);
        match canvas.document().get(0) {
            Some(Element::Rectangle(r)) => {
                assert_eq!(r.position, Point::new(50.0, 50.0));
                assert!((r.width - 100.0).abs() < f64::EPSILON);
                assert!((r.height - 70.0).abs() < f64::EPSILON);
                assert!(r.style.draggable);
            }
            other => panic!("unexpected element {other:?}"),
        }
        assert_eq!(canvas.history().past(), &[ElementCollection::new()]);
        assert_eq!(canvas.history().future_len(), 0);
        assert!(canvas.draft().is_none());
    }

    #[test]
    fn test_pointer_moves_do_not_record_history() {
        let mut canvas = Canvas::new();
        canvas.pointer_down(Point::new(0.0, 0.0));
        for i in 0..10 {
            canvas.pointer_move(Point::new(i as f64, i as f64));
        }
        assert!(!canvas.can_undo());
        assert!(canvas.draft().is_some());
    }

    #[test]
    fn test_pointer_up_without_down() {
        let mut canvas = Canvas::new();
        assert!(!canvas.pointer_move(Point::new(1.0, 1.0)));
        assert!(!canvas.pointer_up());
        assert!(!canvas.can_undo());
    }

    #[test]
    fn test_selection_blocks_drawing() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        canvas.select(0);
        let before = canvas.document().clone();

        assert!(!canvas.pointer_down(Point::new(10.0, 10.0)));
        assert!(canvas.draft().is_none());
        assert!(!canvas.pointer_move(Point::new(20.0, 20.0)));
        assert!(!canvas.pointer_up());
        assert_eq!(canvas.document(), &before);
        assert!(!canvas.can_undo());
    }

    #[test]
    fn test_undo_after_two_commits() {
        let mut canvas = Canvas::new();
        draw(&mut canvas, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let after_a = canvas.document().clone();
        draw(&mut canvas, ToolKind::Circle, Point::new(50.0, 50.0), Point::new(60.0, 50.0));
        assert_eq!(canvas.document().len(), 2);

        assert!(canvas.undo());
        assert_eq!(canvas.document(), &after_a);
        assert!(canvas.undo());
        assert!(canvas.document().is_empty());
        assert!(!canvas.undo());
        assert!(canvas.document().is_empty());
    }

    #[test]
    fn test_undo_redo_inverse_law() {
        let mut canvas = Canvas::new();
        let mut states = Vec::new();
        for (i, tool) in ToolKind::all().iter().enumerate() {
            let start = Point::new(10.0 * i as f64, 5.0);
            draw(&mut canvas, *tool, start, Point::new(start.x + 30.0, 40.0));
            states.push(canvas.document().clone());
        }

        for i in (0..states.len()).rev() {
            assert_eq!(canvas.document(), &states[i]);
            assert!(canvas.undo());
        }
        assert!(canvas.document().is_empty());
        for state in &states {
            assert!(canvas.redo());
            assert_eq!(canvas.document(), state);
        }
        assert!(!canvas.redo());
    }

    #[test]
    fn test_new_commit_after_undo_discards_redo() {
        let mut canvas = Canvas::new();
        draw(&mut canvas, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        draw(&mut canvas, ToolKind::Rectangle, Point::new(5.0, 5.0), Point::new(10.0, 10.0));
        assert!(canvas.undo());
        assert!(canvas.can_redo());

        draw(&mut canvas, ToolKind::Arrow, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(!canvas.can_redo());
        assert!(!canvas.redo());
    }

    #[test]
    fn test_undo_redo_clear_selection() {
        let mut canvas = Canvas::new();
        draw(&mut canvas, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        draw(&mut canvas, ToolKind::Rectangle, Point::new(5.0, 5.0), Point::new(10.0, 10.0));

        canvas.select(1);
        assert!(canvas.undo());
        assert_eq!(canvas.selected_index(), None);

        canvas.select(0);
        assert!(canvas.redo());
        assert_eq!(canvas.selected_index(), None);

        // A failed undo leaves the selection alone.
        let mut fresh = Canvas::new();
        fresh.load_fixture();
        fresh.select(2);
        assert!(!fresh.undo());
        assert_eq!(fresh.selected_index(), Some(2));
    }

    #[test]
    fn test_fixture_load_then_delete() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        let original = canvas.document().clone();
        assert_eq!(original.len(), 4);

        canvas.select(1);
        assert_eq!(canvas.selected_element().map(Element::kind), Some(ElementKind::Circle));
        assert!(canvas.delete_selected());

        let kinds: Vec<ElementKind> = canvas.document().iter().map(Element::kind).collect();
        assert_eq!(kinds, vec![ElementKind::Rectangle, ElementKind::Arrow, ElementKind::Text]);
        assert_eq!(canvas.document().get(0), original.get(0));
        assert_eq!(canvas.document().get(1), original.get(2));
        assert_eq!(canvas.document().get(2), original.get(3));
        assert_eq!(canvas.selected_index(), None);
    }

    #[test]
    fn test_fixture_load_is_unrecorded_by_default() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        assert!(!canvas.can_undo());

        canvas.select(1);
        canvas.delete_selected();
        assert!(canvas.undo());
        assert_eq!(canvas.document().len(), 4);
        assert!(!canvas.undo());
    }

    #[test]
    fn test_fixture_load_undoable_when_configured() {
        let mut canvas = Canvas::with_config(CanvasConfig {
            undoable_fixture_load: true,
            ..CanvasConfig::default()
        });
        canvas.load_fixture();
        assert!(canvas.can_undo());
        assert!(canvas.undo());
        assert!(canvas.document().is_empty());
    }

    #[test]
    fn test_fixture_load_clears_selection() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        canvas.select(3);
        canvas.load_fixture();
        assert_eq!(canvas.selected_index(), None);
    }

    #[test]
    fn test_delete_without_selection() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        assert!(!canvas.can_delete());
        assert!(!canvas.delete_selected());
        assert_eq!(canvas.document().len(), 4);
        assert!(!canvas.can_undo());
    }

    #[test]
    fn test_drag_to_replaces_position_only() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        let before = canvas.document().clone();

        assert!(canvas.drag_to(1, Point::new(250.0, 260.0)));
        match canvas.document().get(1) {
            Some(Element::Circle(c)) => {
                assert_eq!(c.center, Point::new(250.0, 260.0));
                assert!((c.radius - 50.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected element {other:?}"),
        }
        assert_eq!(
            canvas.document().get(1).map(Element::id),
            before.get(1).map(Element::id)
        );
        for i in [0, 2, 3] {
            assert_eq!(canvas.document().get(i), before.get(i));
        }
        assert!(canvas.undo());
        assert_eq!(canvas.document(), &before);
    }

    #[test]
    fn test_drag_arrow_ignored() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        assert!(!canvas.drag_to(2, Point::new(0.0, 0.0)));
        assert!(!canvas.can_undo());
    }

    #[test]
    fn test_drag_non_draggable_ignored() {
        let mut text = Text::new(Point::new(0.0, 0.0), "pinned".to_string());
        text.style.draggable = false;
        let mut canvas = Canvas::new();
        canvas.load_document(ElementCollection::from_elements(vec![Element::Text(text)]));
        assert!(!canvas.drag_to(0, Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_transform_commits_and_resets_scale() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        canvas.select(0);

        let mut report = HandleReport::sized(100.0, 80.0, 2.0, 0.5);
        canvas.transform(0, &mut report);
        match canvas.document().get(0) {
            Some(Element::Rectangle(r)) => {
                assert!((r.width - 200.0).abs() < f64::EPSILON);
                assert!((r.height - 40.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected element {other:?}"),
        }
        assert!(report.has_identity_scale());
        assert!(canvas.can_undo());
        // Transforming does not drop the selection.
        assert_eq!(canvas.selected_index(), Some(0));
    }

    #[test]
    fn test_transform_identity_keeps_geometry() {
        let mut canvas = Canvas::new();
        canvas.load_document(ElementCollection::from_elements(vec![
            Element::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 100.0, 70.0)),
            Element::Circle(Circle::new(Point::new(50.0, 50.0), 30.0)),
        ]));
        let before = canvas.document().clone();

        canvas.transform(0, &mut HandleReport::sized(100.0, 70.0, 1.0, 1.0));
        canvas.transform(1, &mut HandleReport::sized(60.0, 60.0, 1.0, 1.0));
        assert_eq!(canvas.document(), &before);
        assert_eq!(canvas.history().past().len(), 2);
    }

    #[test]
    fn test_transform_text_commits_unchanged() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        let before = canvas.document().clone();
        canvas.transform(3, &mut HandleReport::sized(132.0, 20.0, 3.0, 3.0));
        assert_eq!(canvas.document(), &before);
        assert!(canvas.can_undo());
    }

    #[test]
    fn test_select_mid_drag_discards_draft() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        assert!(canvas.pointer_down(Point::new(10.0, 10.0)));
        assert!(canvas.pointer_move(Point::new(40.0, 40.0)));

        canvas.select(0);
        assert!(canvas.draft().is_none());
        assert!(!canvas.pointer_up());
        assert_eq!(canvas.document().len(), 4);
        assert!(!canvas.can_undo());
        assert_eq!(canvas.selected_index(), Some(0));
    }

    #[test]
    fn test_selected_id_tracks_index() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        let arrow_id = canvas.document().get(2).map(Element::id);
        canvas.select(2);
        assert_eq!(canvas.selected_id(), arrow_id);
        canvas.deselect();
        assert_eq!(canvas.selected_id(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_out_of_range_panics() {
        let mut canvas = Canvas::new();
        canvas.load_fixture();
        canvas.select(4);
    }

    #[test]
    fn test_cancel_draft_discards() {
        let mut canvas = Canvas::new();
        canvas.pointer_down(Point::new(0.0, 0.0));
        canvas.pointer_move(Point::new(20.0, 20.0));
        assert!(canvas.cancel_draft());
        assert!(!canvas.pointer_up());
        assert!(canvas.document().is_empty());
    }

    #[test]
    fn test_max_undo_history_from_config() {
        let mut canvas = Canvas::with_config(CanvasConfig {
            max_undo_history: Some(1),
            ..CanvasConfig::default()
        });
        draw(&mut canvas, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        draw(&mut canvas, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        assert!(canvas.undo());
        assert!(!canvas.undo());
        assert_eq!(canvas.document().len(), 1);
    }
}
