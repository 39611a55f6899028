//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Tracks which modifier keys are held. Shift turns a primary-button drag
/// into a pan and changes Return into a newline while typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a primary-button press should pan instead of using the tool.
    pub fn pans(&self) -> bool {
        self.shift
    }

    /// Whether a command modifier is held, so plain typing does not apply.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt
    }
}
