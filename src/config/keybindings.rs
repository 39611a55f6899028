//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that maps keyboard
//! shortcuts onto editor commands, tool switches, and stroke adjustments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Cancellation
    Cancel,

    // History and scene commands
    Undo,
    Redo,
    ClearCanvas,

    // Viewport
    ZoomIn,
    ZoomOut,
    ResetZoom,
    TogglePanMode,

    // Tool selection
    SelectTool,
    FreehandTool,
    EraserTool,
    LineTool,
    ArrowTool,
    RectangleTool,
    EllipseTool,
    TextTool,

    // Stroke width
    IncreaseThickness,
    DecreaseThickness,

    // Palette colors
    SetColorBlack,
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorOrange,
    SetColorPink,
    SetColorPurple,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty pieces rejoin into "+"
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// rectangle_tool = ["R"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_zoom_in")]
    pub zoom_in: Vec<String>,

    #[serde(default = "default_zoom_out")]
    pub zoom_out: Vec<String>,

    #[serde(default = "default_reset_zoom")]
    pub reset_zoom: Vec<String>,

    #[serde(default = "default_toggle_pan_mode")]
    pub toggle_pan_mode: Vec<String>,

    #[serde(default = "default_select_tool")]
    pub select_tool: Vec<String>,

    #[serde(default = "default_freehand_tool")]
    pub freehand_tool: Vec<String>,

    #[serde(default = "default_eraser_tool")]
    pub eraser_tool: Vec<String>,

    #[serde(default = "default_line_tool")]
    pub line_tool: Vec<String>,

    #[serde(default = "default_arrow_tool")]
    pub arrow_tool: Vec<String>,

    #[serde(default = "default_rectangle_tool")]
    pub rectangle_tool: Vec<String>,

    #[serde(default = "default_ellipse_tool")]
    pub ellipse_tool: Vec<String>,

    #[serde(default = "default_text_tool")]
    pub text_tool: Vec<String>,

    #[serde(default = "default_increase_thickness")]
    pub increase_thickness: Vec<String>,

    #[serde(default = "default_decrease_thickness")]
    pub decrease_thickness: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_orange")]
    pub set_color_orange: Vec<String>,

    #[serde(default = "default_set_color_pink")]
    pub set_color_pink: Vec<String>,

    #[serde(default = "default_set_color_purple")]
    pub set_color_purple: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            cancel: default_cancel(),
            undo: default_undo(),
            redo: default_redo(),
            clear_canvas: default_clear_canvas(),
            zoom_in: default_zoom_in(),
            zoom_out: default_zoom_out(),
            reset_zoom: default_reset_zoom(),
            toggle_pan_mode: default_toggle_pan_mode(),
            select_tool: default_select_tool(),
            freehand_tool: default_freehand_tool(),
            eraser_tool: default_eraser_tool(),
            line_tool: default_line_tool(),
            arrow_tool: default_arrow_tool(),
            rectangle_tool: default_rectangle_tool(),
            ellipse_tool: default_ellipse_tool(),
            text_tool: default_text_tool(),
            increase_thickness: default_increase_thickness(),
            decrease_thickness: default_decrease_thickness(),
            set_color_black: default_set_color_black(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_orange: default_set_color_orange(),
            set_color_pink: default_set_color_pink(),
            set_color_purple: default_set_color_purple(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let bindings: [(&[String], Action); 25] = [
            (&self.cancel, Action::Cancel),
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.zoom_in, Action::ZoomIn),
            (&self.zoom_out, Action::ZoomOut),
            (&self.reset_zoom, Action::ResetZoom),
            (&self.toggle_pan_mode, Action::TogglePanMode),
            (&self.select_tool, Action::SelectTool),
            (&self.freehand_tool, Action::FreehandTool),
            (&self.eraser_tool, Action::EraserTool),
            (&self.line_tool, Action::LineTool),
            (&self.arrow_tool, Action::ArrowTool),
            (&self.rectangle_tool, Action::RectangleTool),
            (&self.ellipse_tool, Action::EllipseTool),
            (&self.text_tool, Action::TextTool),
            (&self.increase_thickness, Action::IncreaseThickness),
            (&self.decrease_thickness, Action::DecreaseThickness),
            (&self.set_color_black, Action::SetColorBlack),
            (&self.set_color_red, Action::SetColorRed),
            (&self.set_color_green, Action::SetColorGreen),
            (&self.set_color_blue, Action::SetColorBlue),
            (&self.set_color_orange, Action::SetColorOrange),
            (&self.set_color_pink, Action::SetColorPink),
            (&self.set_color_purple, Action::SetColorPurple),
        ];

        for (binding_strs, action) in bindings {
            for binding_str in binding_strs {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_cancel() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["Ctrl+Shift+E".to_string()]
}

fn default_zoom_in() -> Vec<String> {
    vec!["Ctrl+=".to_string(), "Ctrl++".to_string()]
}

fn default_zoom_out() -> Vec<String> {
    vec!["Ctrl+-".to_string()]
}

fn default_reset_zoom() -> Vec<String> {
    vec!["Ctrl+0".to_string()]
}

fn default_toggle_pan_mode() -> Vec<String> {
    vec!["H".to_string()]
}

fn default_select_tool() -> Vec<String> {
    vec!["V".to_string()]
}

fn default_freehand_tool() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_eraser_tool() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_line_tool() -> Vec<String> {
    vec!["L".to_string()]
}

fn default_arrow_tool() -> Vec<String> {
    vec!["A".to_string()]
}

fn default_rectangle_tool() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_ellipse_tool() -> Vec<String> {
    vec!["O".to_string()]
}

fn default_text_tool() -> Vec<String> {
    vec!["T".to_string()]
}

fn default_increase_thickness() -> Vec<String> {
    vec!["]".to_string()]
}

fn default_decrease_thickness() -> Vec<String> {
    vec!["[".to_string()]
}

fn default_set_color_black() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["4".to_string()]
}

fn default_set_color_orange() -> Vec<String> {
    vec!["5".to_string()]
}

fn default_set_color_pink() -> Vec<String> {
    vec!["6".to_string()]
}

fn default_set_color_purple() -> Vec<String> {
    vec!["7".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_shift_key() {
        let binding = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
        assert!(!binding.shift);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let a = KeyBinding::parse("Shift + Ctrl + z").unwrap();
        let b = KeyBinding::parse("Ctrl+Shift+z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert!(binding.matches("z", true, false, false));
        assert!(!binding.matches("z", true, true, false));
        assert!(!binding.matches("y", true, false, false));
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Cancel));

        let redo = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert_eq!(map.get(&redo), Some(&Action::Redo));

        let eraser = KeyBinding::parse("E").unwrap();
        assert_eq!(map.get(&eraser), Some(&Action::EraserTool));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.redo = vec!["Ctrl+Z".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("Ctrl+Z"));
    }
}
