//! Scene store: committed elements, the in-progress element, and selection.

use super::element::{Element, StrokeStyle};
use crate::geometry::{self, Point};
use crate::input::Tool;

/// Container for everything drawn in the current session.
///
/// Committed elements are kept in painter's order (first = bottom layer,
/// last = top layer). The in-progress element lives apart from them until it
/// is committed or discarded.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<Element>,
    in_progress: Option<Element>,
    selection: Option<usize>,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed elements in draw order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Element currently being drawn, if any.
    pub fn in_progress(&self) -> Option<&Element> {
        self.in_progress.as_ref()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    /// Starts a provisional element for `tool` at `origin`.
    ///
    /// Returns `false` (and leaves the scene untouched) for tools that do not
    /// draw elements. Any previous in-progress element is replaced.
    pub fn begin_element(&mut self, tool: Tool, origin: Point, style: StrokeStyle) -> bool {
        let StrokeStyle { color, width } = style;
        let element = match tool {
            Tool::Freehand | Tool::Eraser => Element::Freehand {
                points: vec![origin],
                color,
                width,
            },
            Tool::Line => Element::Line {
                start: origin,
                end: origin,
                color,
                width,
            },
            Tool::Arrow => Element::Arrow {
                start: origin,
                end: origin,
                color,
                width,
            },
            Tool::Rectangle => Element::Rectangle {
                origin,
                width: 0.0,
                height: 0.0,
                color,
                stroke_width: width,
            },
            Tool::Ellipse => Element::Ellipse {
                center: origin,
                radius: 0.0,
                color,
                width,
            },
            Tool::Select | Tool::Text => return false,
        };
        self.in_progress = Some(element);
        true
    }

    /// Extends the in-progress element towards `point`.
    ///
    /// Freehand appends the point, line/arrow move their second endpoint,
    /// rectangles take the signed pointer offset as their size, and ellipses
    /// take the distance from their center as the radius.
    pub fn update_element(&mut self, point: Point) {
        let Some(element) = self.in_progress.as_mut() else {
            return;
        };

        match element {
            Element::Freehand { points, .. } => points.push(point),
            Element::Line { end, .. } | Element::Arrow { end, .. } => *end = point,
            Element::Rectangle {
                origin,
                width,
                height,
                ..
            } => {
                *width = point.x - origin.x;
                *height = point.y - origin.y;
            }
            Element::Ellipse { center, radius, .. } => *radius = center.distance_to(point),
            Element::Text { .. } => {}
        }
    }

    /// Moves the in-progress element into the committed sequence.
    ///
    /// Shapes always commit, even at zero size. Freehand strokes need at least
    /// one point. Returns `true` when an element was appended.
    pub fn commit_element(&mut self) -> bool {
        let Some(element) = self.in_progress.take() else {
            return false;
        };

        if let Element::Freehand { points, .. } = &element {
            if points.is_empty() {
                log::debug!("Dropping empty freehand stroke");
                return false;
            }
        }

        log::debug!("Committed {} element #{}", element.kind(), self.elements.len());
        self.elements.push(element);
        true
    }

    /// Drops the in-progress element without committing it.
    pub fn discard_element(&mut self) -> bool {
        self.in_progress.take().is_some()
    }

    /// Appends a text element unless the content is blank.
    pub fn commit_text(&mut self, anchor: Point, content: &str, style: StrokeStyle) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.elements.push(Element::Text {
            anchor,
            content: content.to_string(),
            color: style.color,
            stroke_width: style.width,
        });
        true
    }

    // ------------------------------------------------------------------
    // Whole-scene edits
    // ------------------------------------------------------------------

    /// Removes all committed elements and the selection.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selection = None;
    }

    /// Replaces the committed sequence wholesale (history restore).
    ///
    /// The selection is dropped because indices may now refer to other elements.
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        self.selection = None;
    }

    // ------------------------------------------------------------------
    // Selection and dragging
    // ------------------------------------------------------------------

    /// Returns the index of the topmost element under `point`.
    ///
    /// Searches from the last (top) element down, so recently drawn elements
    /// win over the ones beneath them.
    pub fn hit_test_topmost(&self, point: Point, padding_px: f64, zoom: f64) -> Option<usize> {
        self.elements
            .iter()
            .rposition(|element| geometry::hit_test(point, element, padding_px, zoom))
    }

    /// Whether `point` hits the element at `index`.
    pub fn hits(&self, index: usize, point: Point, padding_px: f64, zoom: f64) -> bool {
        self.elements
            .get(index)
            .is_some_and(|element| geometry::hit_test(point, element, padding_px, zoom))
    }

    /// Shifts the element at `index` by replacing it with a translated copy.
    ///
    /// Out-of-range indices are ignored.
    pub fn translate_element(&mut self, index: usize, dx: f64, dy: f64) -> bool {
        match self.elements.get_mut(index) {
            Some(element) => {
                *element = element.translated(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Selected element, if the selection is set.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.and_then(|index| self.elements.get(index))
    }

    /// Selects `index` when it refers to a committed element.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.elements.len() {
            self.selection = Some(index);
            true
        } else {
            false
        }
    }

    /// Clears the selection; returns whether anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};
    use crate::geometry::Bounds;

    fn style() -> StrokeStyle {
        StrokeStyle::new(BLACK, 2.0)
    }

    #[test]
    fn rectangle_drag_commits_signed_size() {
        let mut scene = Scene::new();
        assert!(scene.begin_element(Tool::Rectangle, Point::new(10.0, 10.0), style()));
        scene.update_element(Point::new(110.0, 60.0));
        assert!(scene.commit_element());

        assert_eq!(scene.len(), 1);
        assert!(scene.in_progress().is_none());
        assert_eq!(scene.elements()[0].bounds(), Bounds::new(10.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn ellipse_radius_is_distance_from_center() {
        let mut scene = Scene::new();
        scene.begin_element(Tool::Ellipse, Point::new(0.0, 0.0), style());
        scene.update_element(Point::new(3.0, 4.0));
        match scene.in_progress() {
            Some(Element::Ellipse { radius, .. }) => assert_eq!(*radius, 5.0),
            other => panic!("expected ellipse, got {other:?}"),
        }
    }

    #[test]
    fn zero_size_shapes_still_commit() {
        let mut scene = Scene::new();
        scene.begin_element(Tool::Line, Point::new(5.0, 5.0), style());
        assert!(scene.commit_element());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn freehand_collects_points_in_order() {
        let mut scene = Scene::new();
        scene.begin_element(Tool::Freehand, Point::new(0.0, 0.0), style());
        scene.update_element(Point::new(1.0, 1.0));
        scene.update_element(Point::new(2.0, 0.0));
        scene.commit_element();

        match &scene.elements()[0] {
            Element::Freehand { points, .. } => assert_eq!(points.len(), 3),
            other => panic!("expected freehand, got {other:?}"),
        }
    }

    #[test]
    fn select_and_text_tools_do_not_begin_elements() {
        let mut scene = Scene::new();
        assert!(!scene.begin_element(Tool::Select, Point::ORIGIN, style()));
        assert!(!scene.begin_element(Tool::Text, Point::ORIGIN, style()));
        assert!(!scene.commit_element());
        assert!(scene.is_empty());
    }

    #[test]
    fn blank_text_is_discarded() {
        let mut scene = Scene::new();
        assert!(!scene.commit_text(Point::ORIGIN, "   ", style()));
        assert!(scene.commit_text(Point::ORIGIN, "hi", style()));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn topmost_hit_prefers_latest_element() {
        let mut scene = Scene::new();
        for color in [BLACK, RED] {
            scene.begin_element(
                Tool::Rectangle,
                Point::new(0.0, 0.0),
                StrokeStyle::new(color, 2.0),
            );
            scene.update_element(Point::new(50.0, 50.0));
            scene.commit_element();
        }

        assert_eq!(scene.hit_test_topmost(Point::new(25.0, 25.0), 10.0, 1.0), Some(1));
        assert_eq!(scene.hit_test_topmost(Point::new(500.0, 500.0), 10.0, 1.0), None);
    }

    #[test]
    fn translate_out_of_range_is_noop() {
        let mut scene = Scene::new();
        assert!(!scene.translate_element(3, 1.0, 1.0));
        assert!(!scene.select(0));
        assert_eq!(scene.selection(), None);
    }

    #[test]
    fn clear_and_replace_drop_selection() {
        let mut scene = Scene::new();
        scene.begin_element(Tool::Line, Point::ORIGIN, style());
        scene.commit_element();
        assert!(scene.select(0));

        scene.replace_all(scene.elements().to_vec());
        assert_eq!(scene.selection(), None);

        scene.select(0);
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.selection(), None);
    }
}
