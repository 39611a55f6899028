//! Library exports for the canvasboard whiteboard core.
//!
//! Hosts feed pointer, wheel, touch and key events into
//! [`input::InputState`], which owns the scene, viewport, history and the
//! Cairo surface everything is rendered into. Configuration types are exported
//! alongside so external tools can share validation and serialization code.

pub mod config;
pub mod draw;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod input;
pub mod script;
pub mod ui;
pub mod viewport;

pub use config::Config;
