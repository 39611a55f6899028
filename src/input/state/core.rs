//! Gesture state machine and input state management.

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{Color, RenderStyle, Scene};
use crate::editor::EditorSession;
use crate::geometry::Point;
use crate::input::{modifiers::Modifiers, tool::Tool};
use crate::viewport::{BUTTON_ZOOM_STEP, Viewport};
use anyhow::Context;
use std::collections::HashMap;

/// Smallest stroke width reachable through the thickness keys.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Largest stroke width reachable through the thickness keys.
pub const MAX_STROKE_WIDTH: f64 = 20.0;

/// Current gesture.
///
/// Exactly one gesture is active at a time. Every terminal event (pointer-up,
/// pointer-leave, Escape, the touch count dropping below two) returns to `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    /// Waiting for input
    Idle,
    /// Dragging the viewport; pan is recomputed from the start values on every move
    Panning {
        /// Screen position of the press
        start_screen: Point,
        /// Viewport pan at the press
        start_pan: Point,
    },
    /// An element is being drawn; the scene holds it as the in-progress element
    Drawing,
    /// Typing a text element
    TextEditing {
        /// Baseline start in scene space
        anchor: Point,
        /// Where the click happened on screen; the typing overlay sits here
        screen_anchor: Point,
        /// Text typed so far
        buffer: String,
    },
    /// Moving a committed element with the select tool
    Dragging {
        /// Index of the element being moved
        index: usize,
        /// Pointer position relative to the element's bounds origin, in scene units
        offset: Point,
        /// Whether any move happened since the press
        moved: bool,
    },
    /// Two-finger zoom
    PinchZooming {
        /// Finger distance when the pinch started
        initial_distance: f64,
        /// Viewport zoom when the pinch started
        start_zoom: f64,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}

/// Initial tool and appearance settings for an [`InputState`].
#[derive(Debug, Clone)]
pub struct InputSettings {
    pub tool: Tool,
    pub color: Color,
    pub stroke_width: f64,
    /// Clickable margin around elements in screen pixels
    pub hit_padding: f64,
    /// Snapshots kept for undo (0 = unlimited)
    pub max_history: usize,
    pub show_zoom_indicator: bool,
    pub show_eraser_cursor: bool,
    pub style: RenderStyle,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl InputSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tool: config.default_tool(),
            color: config.stroke_color(),
            stroke_width: config.drawing.default_thickness,
            hit_padding: config.selection.hit_padding,
            max_history: config.history.max_entries,
            show_zoom_indicator: config.ui.show_zoom_indicator,
            show_eraser_cursor: config.ui.show_eraser_cursor,
            style: config.render_style(),
        }
    }
}

/// Main input state: the editor session plus everything needed to turn host
/// events into edits.
///
/// Every event handler and command runs to completion and ends with at most one
/// full redraw. Until the host calls [`resize`](Self::resize) there is no
/// surface, and every event and command is ignored.
pub struct InputState {
    /// Scene, viewport, history and surface
    pub(super) session: EditorSession,
    /// Current gesture
    pub(super) state: GestureState,
    /// Active tool
    pub(super) tool: Tool,
    /// Stroke color for new elements
    pub(super) color: Color,
    /// Stroke width for new elements
    pub(super) stroke_width: f64,
    /// Forces primary-button drags to pan regardless of tool
    pub(super) pan_mode: bool,
    /// Current modifier key state
    pub(super) modifiers: Modifiers,
    /// Last known pointer position in screen space
    pub(super) pointer: Option<Point>,
    pub(super) hit_padding: f64,
    pub(super) show_zoom_indicator: bool,
    pub(super) show_eraser_cursor: bool,
    pub(super) style: RenderStyle,
    /// Keybinding action map for lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Set by handlers when observable state changed
    pub(super) needs_redraw: bool,
    /// Completed redraw passes
    pub(super) redraw_count: u64,
}

impl InputState {
    /// Creates an input state with the given settings and keybindings.
    pub fn new(settings: InputSettings, action_map: HashMap<KeyBinding, Action>) -> Self {
        Self {
            session: EditorSession::new(settings.max_history),
            state: GestureState::Idle,
            tool: settings.tool,
            color: settings.color,
            stroke_width: settings.stroke_width,
            pan_mode: false,
            modifiers: Modifiers::new(),
            pointer: None,
            hit_padding: settings.hit_padding,
            show_zoom_indicator: settings.show_zoom_indicator,
            show_eraser_cursor: settings.show_eraser_cursor,
            style: settings.style,
            action_map,
            needs_redraw: false,
            redraw_count: 0,
        }
    }

    /// Builds an input state from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if a keybinding is malformed or bound twice.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .context("Invalid keybindings")?;
        Ok(Self::new(InputSettings::from_config(config), action_map))
    }

    // ------------------------------------------------------------------
    // Read access for hosts and tests
    // ------------------------------------------------------------------

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn scene(&self) -> &Scene {
        self.session.scene()
    }

    pub fn viewport(&self) -> &Viewport {
        self.session.viewport()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn pan_mode(&self) -> bool {
        self.pan_mode
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Number of full redraws performed so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    /// Rendering surface for external capture, once the host has sized it.
    pub fn surface_handle(&self) -> Option<&cairo::ImageSurface> {
        self.session.surface().map(|surface| surface.inner())
    }

    /// Mutable surface access (pixel sampling, PNG export).
    pub fn surface_mut(&mut self) -> Option<&mut crate::draw::Surface> {
        self.session.surface_mut()
    }

    // ------------------------------------------------------------------
    // Host configuration (may change between any two events)
    // ------------------------------------------------------------------

    /// Switches the active tool.
    ///
    /// An open text editor loses focus and its text is discarded. Choosing any
    /// tool other than select drops the selection.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        log::debug!("Tool changed: {} -> {}", self.tool, tool);
        self.tool = tool;

        if matches!(self.state, GestureState::TextEditing { .. }) {
            self.state = GestureState::Idle;
            self.needs_redraw = true;
        }

        if tool != Tool::Select
            && self
                .session
                .apply_gesture_step(|scene| scene.clear_selection())
        {
            self.needs_redraw = true;
        }
        self.finish_event();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width for new elements; non-positive values are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            log::warn!("Ignoring invalid stroke width {}", width);
            return;
        }
        self.stroke_width = width;
        if self.tool == Tool::Eraser && self.show_eraser_cursor {
            self.needs_redraw = true;
            self.finish_event();
        }
    }

    pub fn set_pan_mode(&mut self, enabled: bool) {
        self.pan_mode = enabled;
    }

    /// Replaces the surface after a host viewport resize and redraws at once.
    ///
    /// Scene and viewport are untouched. Zero or negative sizes are ignored.
    pub fn resize(&mut self, width: i32, height: i32) {
        match self.session.resize(width, height) {
            Ok(()) => {
                self.needs_redraw = true;
                self.finish_event();
            }
            Err(err) => log::warn!("Ignoring resize: {}", err),
        }
    }

    // ------------------------------------------------------------------
    // Host commands
    // ------------------------------------------------------------------

    /// Steps back one history entry, abandoning any gesture in flight.
    pub fn undo(&mut self) {
        if !self.session.is_ready() {
            return;
        }
        self.cancel_gesture();
        if self.session.undo() {
            log::debug!("Undo -> snapshot {}", self.session.history().cursor());
            self.needs_redraw = true;
        }
        self.finish_event();
    }

    /// Steps forward one history entry, abandoning any gesture in flight.
    pub fn redo(&mut self) {
        if !self.session.is_ready() {
            return;
        }
        self.cancel_gesture();
        if self.session.redo() {
            log::debug!("Redo -> snapshot {}", self.session.history().cursor());
            self.needs_redraw = true;
        }
        self.finish_event();
    }

    /// Removes every committed element as one undoable step.
    pub fn clear(&mut self) {
        if !self.session.is_ready() {
            return;
        }
        self.cancel_gesture();
        if self.session.clear() {
            log::debug!("Cleared scene");
            self.needs_redraw = true;
        }
        self.finish_event();
    }

    /// Zooms in one step around the surface center.
    pub fn zoom_in(&mut self) {
        self.zoom_around_center(BUTTON_ZOOM_STEP);
    }

    /// Zooms out one step around the surface center.
    pub fn zoom_out(&mut self) {
        self.zoom_around_center(1.0 / BUTTON_ZOOM_STEP);
    }

    /// Returns to zoom 1 with no pan.
    pub fn reset_zoom(&mut self) {
        if !self.session.is_ready() {
            return;
        }
        let before = *self.session.viewport();
        self.session.viewport_mut().reset();
        if *self.session.viewport() != before {
            self.needs_redraw = true;
        }
        self.finish_event();
    }

    fn zoom_around_center(&mut self, factor: f64) {
        let Some((width, height)) = self.session.surface_size() else {
            return;
        };
        let center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
        self.zoom_viewport(center, factor);
        self.finish_event();
    }

    // ------------------------------------------------------------------
    // Shared helpers for the event handlers
    // ------------------------------------------------------------------

    /// Anchored zoom; flags a redraw only if the zoom actually changed.
    pub(super) fn zoom_viewport(&mut self, anchor: Point, factor: f64) {
        let before = *self.session.viewport();
        self.session.viewport_mut().zoom_at(anchor, factor);
        if *self.session.viewport() != before {
            self.needs_redraw = true;
        }
    }

    /// Scene-space position of a screen point under the current viewport.
    pub(super) fn to_scene(&self, screen: Point) -> Point {
        self.session.viewport().to_scene(screen)
    }

    /// Abandons the current gesture without recording anything.
    ///
    /// Drawing and text are discarded. A drag that already moved its element
    /// is settled first so the committed scene never diverges from history.
    pub(super) fn cancel_gesture(&mut self) {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Drawing => {
                self.session.apply_gesture_step(Scene::discard_element);
                self.needs_redraw = true;
            }
            GestureState::Dragging { moved: true, .. } => {
                self.settle_drag();
            }
            GestureState::TextEditing { .. } => {
                self.needs_redraw = true;
            }
            GestureState::Idle
            | GestureState::Panning { .. }
            | GestureState::Dragging { .. }
            | GestureState::PinchZooming { .. } => {}
        }
    }

    /// Records the result of a drag as one undo step.
    pub(super) fn settle_drag(&mut self) {
        if self.session.apply_user_edit(|_| {}) {
            log::debug!("Drag settled");
        }
    }

    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }

    /// Adjusts the stroke width by `delta`, clamped to the configurable range.
    pub fn adjust_stroke_width(&mut self, delta: f64) {
        let width = (self.stroke_width + delta).clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if width != self.stroke_width {
            self.stroke_width = width;
            if self.tool == Tool::Eraser && self.show_eraser_cursor {
                self.needs_redraw = true;
            }
        }
    }
}
