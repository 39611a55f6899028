//! Element definitions for whiteboard drawings.

use super::color::Color;
use crate::geometry::{Bounds, Point};

/// Text font size in pixels per unit of stroke width.
pub const TEXT_SIZE_FACTOR: f64 = 8.0;

/// Heuristic glyph advance per character, in units of stroke width.
const TEXT_ADVANCE_FACTOR: f64 = 4.0;

/// Heuristic line height, in units of stroke width.
const TEXT_HEIGHT_FACTOR: f64 = 10.0;

/// Color and width applied to a new element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// One drawn primitive on the whiteboard.
///
/// Each variant carries its own color and width so it renders independently.
/// Elements never reference each other; edits replace a whole element.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Pencil or eraser stroke - polyline through the pointer samples
    Freehand {
        /// Sampled points in scene space
        points: Vec<Point>,
        /// Stroke color (background color for eraser strokes)
        color: Color,
        /// Line thickness in scene units
        width: f64,
    },
    /// Straight line segment
    Line {
        start: Point,
        end: Point,
        color: Color,
        width: f64,
    },
    /// Line with a filled head at `end`
    Arrow {
        start: Point,
        end: Point,
        color: Color,
        width: f64,
    },
    /// Rectangle outline; width/height keep the drag direction and may be negative
    Rectangle {
        origin: Point,
        width: f64,
        height: f64,
        color: Color,
        stroke_width: f64,
    },
    /// Circle outline around `center`
    Ellipse {
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    },
    /// Single-line text, `anchor` is the baseline start
    Text {
        anchor: Point,
        content: String,
        color: Color,
        /// Font size is derived from this (see [`TEXT_SIZE_FACTOR`])
        stroke_width: f64,
    },
}

impl Element {
    /// Returns the axis-aligned bounding box of this element in scene space.
    ///
    /// Stroke width is not included; selection adds its own padding. Text uses
    /// a character-count heuristic instead of measuring glyphs.
    pub fn bounds(&self) -> Bounds {
        match self {
            Element::Freehand { points, .. } => Bounds::enclosing(points).unwrap_or_default(),
            Element::Line { start, end, .. } | Element::Arrow { start, end, .. } => {
                Bounds::from_corners(*start, *end)
            }
            Element::Rectangle {
                origin,
                width,
                height,
                ..
            } => Bounds::from_corners(*origin, origin.offset(*width, *height)),
            Element::Ellipse { center, radius, .. } => Bounds::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
            Element::Text {
                anchor,
                content,
                stroke_width,
                ..
            } => Bounds::new(
                anchor.x,
                anchor.y - stroke_width * TEXT_SIZE_FACTOR,
                content.chars().count() as f64 * stroke_width * TEXT_ADVANCE_FACTOR,
                stroke_width * TEXT_HEIGHT_FACTOR,
            ),
        }
    }

    /// Returns a copy of this element shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Element {
        let mut moved = self.clone();
        match &mut moved {
            Element::Freehand { points, .. } => {
                for point in points.iter_mut() {
                    *point = point.offset(dx, dy);
                }
            }
            Element::Line { start, end, .. } | Element::Arrow { start, end, .. } => {
                *start = start.offset(dx, dy);
                *end = end.offset(dx, dy);
            }
            Element::Rectangle { origin, .. } => *origin = origin.offset(dx, dy),
            Element::Ellipse { center, .. } => *center = center.offset(dx, dy),
            Element::Text { anchor, .. } => *anchor = anchor.offset(dx, dy),
        }
        moved
    }

    /// Whether the in-progress preview should render faded.
    ///
    /// Freehand strokes show at full strength while drawing; shapes do not.
    pub fn fades_as_preview(&self) -> bool {
        !matches!(self, Element::Freehand { .. })
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Freehand { .. } => "freehand",
            Element::Line { .. } => "line",
            Element::Arrow { .. } => "arrow",
            Element::Rectangle { .. } => "rectangle",
            Element::Ellipse { .. } => "ellipse",
            Element::Text { .. } => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn freehand_bounds_cover_all_points() {
        let element = Element::Freehand {
            points: vec![
                Point::new(10.0, 20.0),
                Point::new(30.0, 5.0),
                Point::new(-4.0, 12.0),
            ],
            color: BLACK,
            width: 6.0,
        };
        assert_eq!(element.bounds(), Bounds::new(-4.0, 5.0, 34.0, 15.0));
    }

    #[test]
    fn rectangle_bounds_normalize_negative_size() {
        let element = Element::Rectangle {
            origin: Point::new(110.0, 60.0),
            width: -100.0,
            height: -50.0,
            color: RED,
            stroke_width: 2.0,
        };
        assert_eq!(element.bounds(), Bounds::new(10.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn ellipse_bounds_use_radius_on_both_axes() {
        let element = Element::Ellipse {
            center: Point::new(50.0, 50.0),
            radius: 20.0,
            color: BLACK,
            width: 2.0,
        };
        assert_eq!(element.bounds(), Bounds::new(30.0, 30.0, 40.0, 40.0));
    }

    #[test]
    fn text_bounds_follow_character_heuristic() {
        let element = Element::Text {
            anchor: Point::new(100.0, 200.0),
            content: "Hello".to_string(),
            color: BLACK,
            stroke_width: 2.0,
        };
        assert_eq!(element.bounds(), Bounds::new(100.0, 184.0, 40.0, 20.0));
    }

    #[test]
    fn translation_moves_every_point() {
        let arrow = Element::Arrow {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 10.0),
            color: BLACK,
            width: 2.0,
        };
        let moved = arrow.translated(5.0, -5.0);
        assert_eq!(moved.bounds(), Bounds::new(5.0, -5.0, 10.0, 10.0));
        // Original untouched
        assert_eq!(arrow.bounds(), Bounds::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn only_shapes_fade_while_previewing() {
        let stroke = Element::Freehand {
            points: vec![Point::ORIGIN],
            color: BLACK,
            width: 2.0,
        };
        let line = Element::Line {
            start: Point::ORIGIN,
            end: Point::ORIGIN,
            color: BLACK,
            width: 2.0,
        };
        assert!(!stroke.fades_as_preview());
        assert!(line.fades_as_preview());
    }
}
