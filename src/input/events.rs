//! Generic input event types delivered by the host.

/// Generic key representation.
///
/// Hosts map their native key codes to these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as used in keybindings and scripts
    /// ("Escape", "Return", "Space", or a single character).
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name.to_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Name used for keybinding lookup; `None` for modifiers and unknown keys.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, pen tip, or a single touch
    Primary,
    /// Middle mouse button (always pans)
    Middle,
    /// Right mouse button (ignored)
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_parse() {
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("enter"), Some(Key::Return));
        assert_eq!(Key::from_name("z"), Some(Key::Char('z')));
        assert_eq!(Key::from_name("zz"), None);
        assert_eq!(Key::Char('+').binding_name().as_deref(), Some("+"));
        assert_eq!(Key::Shift.binding_name(), None);
    }
}
