//! Pan/zoom transform between screen and scene coordinates.

use crate::geometry::Point;

/// Lowest zoom factor reachable by any zoom operation.
pub const MIN_ZOOM: f64 = 0.1;

/// Highest zoom factor reachable by any zoom operation.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom factor per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Zoom factor for the zoom-in/zoom-out commands.
pub const BUTTON_ZOOM_STEP: f64 = 1.2;

/// Viewport transform: `screen = scene × zoom + pan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pan: Point,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Maps a screen position into scene coordinates.
    pub fn to_scene(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    /// Maps a scene position onto the screen.
    pub fn to_screen(&self, scene: Point) -> Point {
        Point::new(
            scene.x * self.zoom + self.pan.x,
            scene.y * self.zoom + self.pan.y,
        )
    }

    /// Sets the absolute pan offset.
    ///
    /// Pan gestures compute `current_screen - (start_screen - start_pan)` on
    /// every move so the offset never accumulates rounding drift.
    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Zooms by `factor` while keeping the scene point under `anchor` fixed.
    ///
    /// The resulting zoom is clamped to [`MIN_ZOOM`, `MAX_ZOOM`]; the pan is
    /// derived from the clamped value, so the anchor stays put even when the
    /// requested factor was cut short.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("Ignoring invalid zoom factor {}", factor);
            return;
        }

        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == old_zoom {
            return;
        }
        let ratio = new_zoom / old_zoom;

        self.pan = Point::new(
            anchor.x - (anchor.x - self.pan.x) * ratio,
            anchor.y - (anchor.y - self.pan.y) * ratio,
        );
        self.zoom = new_zoom;
    }

    /// Returns to zoom 1 with no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zoom rounded to a whole percentage, for the on-surface indicator.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn screen_and_scene_are_inverse() {
        let mut viewport = Viewport::new();
        viewport.set_pan(Point::new(30.0, -12.0));
        viewport.zoom_at(Point::new(5.0, 5.0), 2.5);

        let scene = Point::new(17.0, 42.0);
        assert_point_eq(viewport.to_scene(viewport.to_screen(scene)), scene);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut viewport = Viewport::new();
        viewport.set_pan(Point::new(-40.0, 25.0));
        let anchor = Point::new(320.0, 180.0);

        for factor in [1.1, 1.0 / 1.1, 3.0, 0.01, 100.0] {
            let before = viewport.to_scene(anchor);
            viewport.zoom_at(anchor, factor);
            assert_point_eq(viewport.to_scene(anchor), before);
        }
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = Viewport::new();
        viewport.zoom_at(Point::ORIGIN, 100.0);
        assert_eq!(viewport.zoom(), MAX_ZOOM);
        viewport.zoom_at(Point::ORIGIN, 0.0001);
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn doubling_at_center_shifts_pan() {
        let mut viewport = Viewport::new();
        viewport.zoom_at(Point::new(200.0, 200.0), 2.0);
        assert_eq!(viewport.zoom(), 2.0);
        assert_point_eq(viewport.pan(), Point::new(-200.0, -200.0));
    }

    #[test]
    fn invalid_factor_is_ignored() {
        let mut viewport = Viewport::new();
        viewport.zoom_at(Point::ORIGIN, f64::NAN);
        viewport.zoom_at(Point::ORIGIN, -2.0);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn reset_restores_identity() {
        let mut viewport = Viewport::new();
        viewport.set_pan(Point::new(10.0, 10.0));
        viewport.zoom_at(Point::ORIGIN, 2.0);
        viewport.reset();
        viewport.reset();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.pan(), Point::ORIGIN);
        assert_eq!(viewport.zoom_percent(), 100);
    }
}
