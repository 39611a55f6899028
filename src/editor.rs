//! Editor session: the single owner of scene, viewport, history and surface.

use crate::draw::{Element, Scene, Surface, SurfaceError};
use crate::history::History;
use crate::viewport::Viewport;

/// All mutable whiteboard state in one place.
///
/// Scene changes go through one of three paths:
/// - [`apply_gesture_step`](Self::apply_gesture_step) for provisional changes
///   while a gesture is in flight (never recorded)
/// - [`apply_user_edit`](Self::apply_user_edit) for committing changes
///   (recorded when the committed elements differ from the current snapshot)
/// - [`apply_history_replay`](Self::apply_history_replay) for undo/redo
///   restores (never recorded)
#[derive(Debug, Default)]
pub struct EditorSession {
    scene: Scene,
    viewport: Viewport,
    history: History,
    surface: Option<Surface>,
}

impl EditorSession {
    /// Creates a session without a surface; call [`resize`](Self::resize) to
    /// make it ready.
    pub fn new(max_history: usize) -> Self {
        Self {
            history: History::new(max_history),
            ..Self::default()
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    /// Whether a surface exists; every event is ignored until then.
    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    /// Replaces the surface with one of the new size.
    ///
    /// Scene and viewport are left as they are; content is not rescaled.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        let surface = Surface::new(width, height)?;
        log::debug!("Surface resized to {}x{}", width, height);
        self.surface = Some(surface);
        Ok(())
    }

    /// Surface size in pixels, if ready.
    pub fn surface_size(&self) -> Option<(i32, i32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }

    /// Applies a provisional change (in-progress element, drag step, selection).
    pub fn apply_gesture_step<R>(&mut self, step: impl FnOnce(&mut Scene) -> R) -> R {
        step(&mut self.scene)
    }

    /// Applies a committing change and records a snapshot if it altered the
    /// committed elements.
    ///
    /// Returns whether a snapshot was recorded.
    pub fn apply_user_edit(&mut self, edit: impl FnOnce(&mut Scene)) -> bool {
        edit(&mut self.scene);
        if self.scene.elements() == self.history.current() {
            return false;
        }
        self.history.snapshot(self.scene.elements());
        log::debug!(
            "Recorded snapshot {} ({} elements)",
            self.history.cursor(),
            self.scene.len()
        );
        true
    }

    /// Restores a snapshot without touching history.
    pub fn apply_history_replay(&mut self, elements: Vec<Element>) {
        self.scene.replace_all(elements);
    }

    /// Steps back one snapshot. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                let elements = snapshot.to_vec();
                self.apply_history_replay(elements);
                true
            }
            None => false,
        }
    }

    /// Steps forward one snapshot. Returns `false` at the end of history.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                let elements = snapshot.to_vec();
                self.apply_history_replay(elements);
                true
            }
            None => false,
        }
    }

    /// Removes every committed element as one undoable step.
    pub fn clear(&mut self) -> bool {
        let had_selection = self.scene.selection().is_some();
        self.apply_user_edit(Scene::clear) || had_selection
    }
}
