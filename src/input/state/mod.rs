mod actions;
mod core;
mod mouse;
mod render;
mod touch;

pub use self::core::{GestureState, InputSettings, InputState, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
