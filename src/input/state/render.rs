use crate::draw::element::TEXT_SIZE_FACTOR;
use crate::draw::render_scene;
use crate::input::tool::{ERASER_WIDTH_MULTIPLIER, Tool};
use crate::ui;

use super::{GestureState, InputState};

impl InputState {
    /// Ends an event: performs the single redraw it asked for, if any.
    pub(super) fn finish_event(&mut self) {
        if !self.needs_redraw {
            return;
        }
        self.needs_redraw = false;
        self.redraw();
    }

    /// Full redraw of the surface: scene pass, then screen-space overlays.
    ///
    /// Does nothing before the surface exists. Cairo failures are logged and
    /// leave the previous frame in place.
    pub fn redraw(&mut self) {
        let Some(surface) = self.session.surface() else {
            return;
        };
        let ctx = match surface.context() {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("Skipping redraw: {}", err);
                return;
            }
        };
        let height = surface.height();

        if let Err(err) = render_scene(&ctx, self.session.scene(), self.session.viewport(), &self.style)
        {
            log::warn!("Scene render failed: {}", err);
        }
        self.render_overlays(&ctx, height);

        drop(ctx);
        if let Some(surface) = self.session.surface() {
            surface.inner().flush();
        }
        self.redraw_count += 1;
    }

    fn render_overlays(&self, ctx: &cairo::Context, height: i32) {
        let zoom = self.session.viewport().zoom();

        if let GestureState::TextEditing {
            screen_anchor,
            buffer,
            ..
        } = &self.state
        {
            ui::render_text_editor(
                ctx,
                *screen_anchor,
                buffer,
                self.color,
                self.stroke_width * TEXT_SIZE_FACTOR * zoom,
                &self.style.font,
            );
        }

        if self.tool == Tool::Eraser && self.show_eraser_cursor {
            if let Some(pointer) = self.pointer {
                let diameter = self.stroke_width * ERASER_WIDTH_MULTIPLIER * zoom;
                ui::render_eraser_cursor(ctx, pointer, diameter);
            }
        }

        if self.show_zoom_indicator {
            ui::render_zoom_indicator(ctx, self.session.viewport().zoom_percent(), height);
        }
    }
}
