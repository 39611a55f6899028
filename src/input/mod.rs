//! Input handling and gesture state machine.
//!
//! This module translates host pointer, touch, wheel and keyboard events into
//! editor operations. It keeps the active tool and stroke settings, and drives
//! the gesture state machine (idle, panning, drawing, text editing, dragging,
//! pinch zooming).

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

pub use events::{Key, PointerButton};
pub use modifiers::Modifiers;
pub use state::{GestureState, InputSettings, InputState};
pub use tool::Tool;
