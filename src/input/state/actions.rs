use crate::config::Action;
use crate::draw::{Scene, StrokeStyle, color};
use crate::input::{events::Key, tool::Tool};

use super::{GestureState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Handles:
    /// - Modifier key tracking
    /// - Text entry while a text editor is open (Return commits, Shift+Return
    ///   inserts a newline, Backspace deletes, Escape cancels)
    /// - Configurable keybindings for commands, tools, colors and thickness
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        if !self.session.is_ready() {
            return;
        }

        if matches!(self.state, GestureState::TextEditing { .. }) {
            // Plain characters are text; actions need Ctrl/Alt or a special key
            let checks_actions = match key {
                Key::Escape => true,
                _ => self.modifiers.has_command(),
            };
            if checks_actions {
                if let Some(action) = key.binding_name().and_then(|name| self.find_action(&name)) {
                    self.handle_action(action);
                    self.finish_event();
                    return;
                }
            }

            self.edit_text(key);
            self.finish_event();
            return;
        }

        if let Some(action) = key.binding_name().and_then(|name| self.find_action(&name)) {
            self.handle_action(action);
        }
        self.finish_event();
    }

    /// Processes a key release event; only modifier state changes.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Types `text` into the open text editor, one character at a time.
    pub fn type_text(&mut self, text: &str) {
        if !self.session.is_ready() {
            return;
        }
        if let GestureState::TextEditing { buffer, .. } = &mut self.state {
            if !text.is_empty() {
                buffer.push_str(text);
                self.needs_redraw = true;
            }
        }
        self.finish_event();
    }

    /// Applies a key to the open text editor.
    fn edit_text(&mut self, key: Key) {
        let GestureState::TextEditing { buffer, .. } = &mut self.state else {
            return;
        };

        match key {
            Key::Char(c) => buffer.push(c),
            Key::Space => buffer.push(' '),
            Key::Backspace => {
                if buffer.pop().is_none() {
                    return;
                }
            }
            Key::Return if self.modifiers.shift => buffer.push('\n'),
            Key::Return => {
                self.commit_text();
                return;
            }
            Key::Escape => {
                self.state = GestureState::Idle;
            }
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Commits the open text editor's content as a text element.
    ///
    /// Blank content closes the editor without adding anything.
    fn commit_text(&mut self) {
        let GestureState::TextEditing { anchor, buffer, .. } =
            std::mem::replace(&mut self.state, GestureState::Idle)
        else {
            return;
        };

        let style = StrokeStyle::new(self.color, self.stroke_width);
        let mut committed = false;
        self.session.apply_user_edit(|scene| {
            committed = scene.commit_text(anchor, &buffer, style);
        });
        if committed {
            log::debug!("Committed text element ({} chars)", buffer.chars().count());
        }
        self.needs_redraw = true;
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Cancel => self.cancel(),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::ClearCanvas => self.clear(),
            Action::ZoomIn => self.zoom_in(),
            Action::ZoomOut => self.zoom_out(),
            Action::ResetZoom => self.reset_zoom(),
            Action::TogglePanMode => {
                self.pan_mode = !self.pan_mode;
                log::info!("Pan mode {}", if self.pan_mode { "on" } else { "off" });
            }
            Action::SelectTool => self.set_tool(Tool::Select),
            Action::FreehandTool => self.set_tool(Tool::Freehand),
            Action::EraserTool => self.set_tool(Tool::Eraser),
            Action::LineTool => self.set_tool(Tool::Line),
            Action::ArrowTool => self.set_tool(Tool::Arrow),
            Action::RectangleTool => self.set_tool(Tool::Rectangle),
            Action::EllipseTool => self.set_tool(Tool::Ellipse),
            Action::TextTool => self.set_tool(Tool::Text),
            Action::IncreaseThickness => self.adjust_stroke_width(1.0),
            Action::DecreaseThickness => self.adjust_stroke_width(-1.0),
            Action::SetColorBlack => self.color = color::BLACK,
            Action::SetColorRed => self.color = color::RED,
            Action::SetColorGreen => self.color = color::GREEN,
            Action::SetColorBlue => self.color = color::BLUE,
            Action::SetColorOrange => self.color = color::ORANGE,
            Action::SetColorPink => self.color = color::PINK,
            Action::SetColorPurple => self.color = color::PURPLE,
        }
    }

    /// Escape: drops drawing or open text, ends a pan or pinch, settles a
    /// drag where it stands, and drops the selection when idle.
    fn cancel(&mut self) {
        match &self.state {
            GestureState::Drawing => {
                self.session.apply_gesture_step(Scene::discard_element);
                self.state = GestureState::Idle;
                self.needs_redraw = true;
            }
            GestureState::TextEditing { .. } => {
                self.state = GestureState::Idle;
                self.needs_redraw = true;
            }
            GestureState::Idle => {
                if self
                    .session
                    .apply_gesture_step(|scene| scene.clear_selection())
                {
                    self.needs_redraw = true;
                }
            }
            GestureState::Panning { .. }
            | GestureState::Dragging { .. }
            | GestureState::PinchZooming { .. } => self.cancel_gesture(),
        }
    }
}
