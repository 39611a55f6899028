//! Geometry primitives shared by the scene, viewport and renderer.
//!
//! This module provides:
//! - [`Point`] and [`Bounds`] value types
//! - Arrowhead geometry calculations
//! - Zoom-invariant hit testing against element bounds

use crate::draw::Element;

/// Default arrowhead length in scene units.
pub const DEFAULT_ARROW_HEAD_LENGTH: f64 = 15.0;

/// Default angle between the shaft and each side of the arrowhead, in degrees.
pub const DEFAULT_ARROW_HEAD_ANGLE: f64 = 30.0;

/// Default selection padding in screen pixels.
pub const DEFAULT_HIT_PADDING: f64 = 10.0;

/// A 2D point in either scene or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint between this point and another.
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned box with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a box from two opposite corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(min_x, min_y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);

        for point in &points[1..] {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the box grown by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }
}

// ============================================================================
// Hit Testing
// ============================================================================

/// Returns whether `point` (scene space) falls on `element`.
///
/// The element bounds are grown by `padding_px` screen pixels, converted into
/// scene units by dividing by `zoom`, so small elements stay clickable at any
/// zoom level.
pub fn hit_test(point: Point, element: &Element, padding_px: f64, zoom: f64) -> bool {
    if zoom <= 0.0 {
        return false;
    }
    element.bounds().inflate(padding_px / zoom).contains(point)
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the two back vertices of an arrowhead sitting on `end`.
///
/// The head-length vector is laid back along the shaft (from `end` towards
/// `start`) and rotated by ±`angle_degrees`. The returned points together with
/// `end` form the filled head triangle. A zero-length shaft points along +x.
pub fn arrowhead_points(
    start: Point,
    end: Point,
    head_length: f64,
    angle_degrees: f64,
) -> [Point; 2] {
    let shaft_angle = (end.y - start.y).atan2(end.x - start.x);
    let spread = angle_degrees.to_radians();

    let left = Point::new(
        end.x - head_length * (shaft_angle - spread).cos(),
        end.y - head_length * (shaft_angle - spread).sin(),
    );
    let right = Point::new(
        end.x - head_length * (shaft_angle + spread).cos(),
        end.y - head_length * (shaft_angle + spread).sin(),
    );

    [left, right]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    const EPS: f64 = 1e-9;

    #[test]
    fn bounds_from_corners_normalizes_direction() {
        let bounds = Bounds::from_corners(Point::new(110.0, 60.0), Point::new(10.0, 10.0));
        assert_eq!(bounds, Bounds::new(10.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn enclosing_handles_single_and_empty() {
        assert!(Bounds::enclosing(&[]).is_none());
        let single = Bounds::enclosing(&[Point::new(4.0, 5.0)]).unwrap();
        assert_eq!(single, Bounds::new(4.0, 5.0, 0.0, 0.0));
    }

    #[test]
    fn contains_is_inclusive_on_edges() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(0.0, 5.0)));
        assert!(!bounds.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn arrowhead_is_symmetric_around_horizontal_shaft() {
        let [left, right] =
            arrowhead_points(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 15.0, 30.0);
        let expected_back = 100.0 - 15.0 * 30f64.to_radians().cos();
        let expected_side = 15.0 * 30f64.to_radians().sin();

        assert!((left.x - expected_back).abs() < EPS);
        assert!((right.x - expected_back).abs() < EPS);
        assert!((left.y + expected_side).abs() < EPS);
        assert!((right.y - expected_side).abs() < EPS);
    }

    #[test]
    fn arrowhead_vertices_sit_at_head_length_from_tip() {
        let end = Point::new(40.0, -20.0);
        for point in arrowhead_points(Point::new(-5.0, 12.0), end, 15.0, 30.0) {
            assert!((point.distance_to(end) - 15.0).abs() < EPS);
        }
    }

    #[test]
    fn hit_padding_is_scaled_by_zoom() {
        let element = Element::Rectangle {
            origin: Point::new(0.0, 0.0),
            width: 10.0,
            height: 10.0,
            color: BLACK,
            stroke_width: 2.0,
        };

        // 30 scene units outside: misses at zoom 1, hits when 10px covers 50 units
        let probe = Point::new(40.0, 5.0);
        assert!(!hit_test(probe, &element, 10.0, 1.0));
        assert!(hit_test(probe, &element, 10.0, 0.2));
    }

    #[test]
    fn hit_test_rejects_non_positive_zoom() {
        let element = Element::Line {
            start: Point::ORIGIN,
            end: Point::new(5.0, 5.0),
            color: BLACK,
            width: 1.0,
        };
        assert!(!hit_test(Point::new(1.0, 1.0), &element, 10.0, 0.0));
    }
}
