use crate::draw::Scene;
use crate::geometry::Point;
use crate::viewport::{MAX_ZOOM, MIN_ZOOM};

use super::{GestureState, InputState};

/// Finger distances below this cannot anchor a pinch.
const MIN_PINCH_DISTANCE: f64 = 1e-6;

impl InputState {
    /// Processes a touch-start with every finger currently down.
    ///
    /// Two or more fingers start a pinch, overriding whatever gesture was in
    /// flight: an in-progress element or open text is discarded and a drag is
    /// settled where it stands. Single touches arrive as pointer events.
    pub fn on_touch_start(&mut self, touches: &[Point]) {
        if !self.session.is_ready() {
            return;
        }
        let [first, second, ..] = touches else {
            return;
        };

        let initial_distance = first.distance_to(*second);
        if initial_distance < MIN_PINCH_DISTANCE {
            log::debug!("Ignoring pinch with coincident touches");
            return;
        }

        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Drawing => {
                self.session.apply_gesture_step(Scene::discard_element);
                self.needs_redraw = true;
            }
            GestureState::Dragging { moved: true, .. } => self.settle_drag(),
            GestureState::TextEditing { .. } => self.needs_redraw = true,
            GestureState::Idle
            | GestureState::Panning { .. }
            | GestureState::Dragging { .. }
            | GestureState::PinchZooming { .. } => {}
        }

        self.state = GestureState::PinchZooming {
            initial_distance,
            start_zoom: self.session.viewport().zoom(),
        };
        log::debug!("Pinch started at distance {:.1}", initial_distance);
        self.finish_event();
    }

    /// Processes a touch-move while pinching.
    ///
    /// The zoom becomes `start_zoom × current / initial distance` (clamped),
    /// anchored at the current centroid of the first two fingers.
    pub fn on_touch_move(&mut self, touches: &[Point]) {
        if !self.session.is_ready() {
            return;
        }
        let GestureState::PinchZooming {
            initial_distance,
            start_zoom,
        } = self.state
        else {
            return;
        };
        let [first, second, ..] = touches else {
            return;
        };

        let distance = first.distance_to(*second);
        let centroid = first.midpoint(*second);
        // Fingers meeting at one point pinch all the way out
        let target = (start_zoom * distance / initial_distance).clamp(MIN_ZOOM, MAX_ZOOM);
        let factor = target / self.session.viewport().zoom();

        self.zoom_viewport(centroid, factor);
        self.finish_event();
    }

    /// Processes a touch-end with the fingers that remain down.
    ///
    /// Fewer than two remaining fingers end the pinch.
    pub fn on_touch_end(&mut self, remaining: &[Point]) {
        if !self.session.is_ready() {
            return;
        }
        if remaining.len() < 2 && matches!(self.state, GestureState::PinchZooming { .. }) {
            log::debug!("Pinch ended");
            self.state = GestureState::Idle;
        }
        self.finish_event();
    }
}
