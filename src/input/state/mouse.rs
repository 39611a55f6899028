use crate::draw::Scene;
use crate::geometry::Point;
use crate::input::{events::PointerButton, tool::Tool};
use crate::viewport::WHEEL_ZOOM_STEP;

use super::{GestureState, InputState};

impl InputState {
    /// Processes a pointer button press at screen position `(x, y)`.
    ///
    /// # Behavior
    /// - Middle button, or primary with Shift held or pan mode on: starts panning
    /// - Select tool: picks the element under the pointer and starts dragging it,
    ///   or clears the selection over empty space
    /// - Text tool: opens a text editor at the pointer
    /// - Drawing tools: begins a new in-progress element
    /// - Secondary button: ignored
    ///
    /// An open text editor loses focus on any press, which discards its text.
    pub fn on_pointer_down(&mut self, button: PointerButton, x: f64, y: f64) {
        if !self.session.is_ready() {
            return;
        }
        let screen = Point::new(x, y);
        self.pointer = Some(screen);

        if button == PointerButton::Secondary {
            return;
        }

        if matches!(self.state, GestureState::TextEditing { .. }) {
            log::debug!("Text editor lost focus, discarding");
            self.state = GestureState::Idle;
            self.needs_redraw = true;
        }

        if !self.state.is_idle() {
            self.finish_event();
            return;
        }

        let pans = button == PointerButton::Middle || self.pan_mode || self.modifiers.pans();
        if pans {
            self.state = GestureState::Panning {
                start_screen: screen,
                start_pan: self.session.viewport().pan(),
            };
        } else {
            match self.tool {
                Tool::Select => self.begin_select(screen),
                Tool::Text => self.begin_text(screen),
                tool => self.begin_drawing(tool, screen),
            }
        }

        self.finish_event();
    }

    /// Processes pointer motion at screen position `(x, y)`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.session.is_ready() {
            return;
        }
        let screen = Point::new(x, y);
        self.pointer = Some(screen);

        match &mut self.state {
            GestureState::Drawing => {
                let point = self.session.viewport().to_scene(screen);
                self.session
                    .apply_gesture_step(|scene| scene.update_element(point));
                self.needs_redraw = true;
            }
            GestureState::Panning {
                start_screen,
                start_pan,
            } => {
                let pan = Point::new(
                    screen.x - (start_screen.x - start_pan.x),
                    screen.y - (start_screen.y - start_pan.y),
                );
                self.session.viewport_mut().set_pan(pan);
                self.needs_redraw = true;
            }
            GestureState::Dragging {
                index,
                offset,
                moved,
            } => {
                let index = *index;
                let point = self.session.viewport().to_scene(screen);
                let target = Point::new(point.x - offset.x, point.y - offset.y);

                let moved_now = self.session.apply_gesture_step(|scene| {
                    drag_element_to(scene, index, target)
                });
                if moved_now {
                    *moved = true;
                    self.needs_redraw = true;
                }
            }
            GestureState::Idle => {
                if self.tool == Tool::Eraser && self.show_eraser_cursor {
                    self.needs_redraw = true;
                }
            }
            GestureState::TextEditing { .. } | GestureState::PinchZooming { .. } => {}
        }

        self.finish_event();
    }

    /// Processes a pointer button release at screen position `(x, y)`.
    ///
    /// Drawing commits the in-progress element, dragging settles the moved
    /// element, and panning simply stops. Each commit is one undo step.
    pub fn on_pointer_up(&mut self, button: PointerButton, x: f64, y: f64) {
        if !self.session.is_ready() || button == PointerButton::Secondary {
            return;
        }

        let screen = Point::new(x, y);
        if self.state == GestureState::Drawing && self.pointer != Some(screen) {
            let point = self.to_scene(screen);
            self.session
                .apply_gesture_step(|scene| scene.update_element(point));
        }
        self.pointer = Some(screen);

        self.end_pointer_gesture();
        self.finish_event();
    }

    /// Pointer left the surface; behaves like a release at the last position.
    pub fn on_pointer_leave(&mut self) {
        if !self.session.is_ready() {
            return;
        }
        self.end_pointer_gesture();
        if self.tool == Tool::Eraser && self.show_eraser_cursor && self.pointer.is_some() {
            self.needs_redraw = true;
        }
        self.pointer = None;
        self.finish_event();
    }

    /// Processes a wheel notch at screen position `(x, y)`.
    ///
    /// Positive `delta_y` (scrolling down) zooms out, negative zooms in, both
    /// anchored at the cursor.
    pub fn on_wheel(&mut self, x: f64, y: f64, delta_y: f64) {
        if !self.session.is_ready() || delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let factor = if delta_y > 0.0 {
            1.0 / WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        self.zoom_viewport(Point::new(x, y), factor);
        self.finish_event();
    }

    /// Terminates pointer-driven gestures. Text editing and pinches survive.
    fn end_pointer_gesture(&mut self) {
        match &self.state {
            GestureState::Drawing => {
                self.state = GestureState::Idle;
                if self.session.apply_user_edit(|scene| {
                    scene.commit_element();
                }) {
                    log::debug!("Committed element, history at {}", self.session.history().cursor());
                }
                self.needs_redraw = true;
            }
            GestureState::Dragging { moved, .. } => {
                let moved = *moved;
                self.state = GestureState::Idle;
                if moved {
                    self.settle_drag();
                }
            }
            GestureState::Panning { .. } => {
                self.state = GestureState::Idle;
            }
            GestureState::Idle
            | GestureState::TextEditing { .. }
            | GestureState::PinchZooming { .. } => {}
        }
    }

    fn begin_select(&mut self, screen: Point) {
        let point = self.to_scene(screen);
        let zoom = self.session.viewport().zoom();
        let padding = self.hit_padding;

        let scene = self.session.scene();
        let hit = scene
            .selection()
            .filter(|&index| scene.hits(index, point, padding, zoom))
            .or_else(|| scene.hit_test_topmost(point, padding, zoom));

        match hit {
            Some(index) => {
                let origin = self.session.scene().elements()[index].bounds().origin();
                let previous = self.session.scene().selection();
                self.session.apply_gesture_step(|scene| scene.select(index));
                if previous != Some(index) {
                    self.needs_redraw = true;
                }
                log::debug!("Selected element #{}", index);
                self.state = GestureState::Dragging {
                    index,
                    offset: Point::new(point.x - origin.x, point.y - origin.y),
                    moved: false,
                };
            }
            None => {
                if self
                    .session
                    .apply_gesture_step(|scene| scene.clear_selection())
                {
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn begin_text(&mut self, screen: Point) {
        self.state = GestureState::TextEditing {
            anchor: self.to_scene(screen),
            screen_anchor: screen,
            buffer: String::new(),
        };
        self.needs_redraw = true;
    }

    fn begin_drawing(&mut self, tool: Tool, screen: Point) {
        let point = self.to_scene(screen);
        let style = tool.stroke_style(self.color, self.stroke_width, self.style.background);
        if self
            .session
            .apply_gesture_step(|scene| scene.begin_element(tool, point, style))
        {
            self.state = GestureState::Drawing;
            self.needs_redraw = true;
        }
    }
}

/// Moves the element at `index` so its bounds origin lands on `target`.
///
/// Returns `false` when the element is already there or the index is stale.
fn drag_element_to(scene: &mut Scene, index: usize, target: Point) -> bool {
    let Some(element) = scene.elements().get(index) else {
        return false;
    };
    let origin = element.bounds().origin();
    let (dx, dy) = (target.x - origin.x, target.y - origin.y);
    if dx == 0.0 && dy == 0.0 {
        return false;
    }
    scene.translate_element(index, dx, dy)
}
