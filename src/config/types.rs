//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool, color and thickness the board starts with. The host can
/// change all of them at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool active at startup (select, freehand, eraser, line, arrow, rectangle, ellipse, text)
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Default stroke color - a palette name, `#rrggbb`, or an RGB array like `[224, 49, 49]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in scene units (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Font family name for text elements (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_thickness: default_thickness(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Board appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Background fill; the eraser paints with this color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
        }
    }
}

/// Arrow drawing settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead length in scene units (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub head_length: f64,

    /// Angle between shaft and each head side in degrees (valid range: 15.0 - 60.0)
    #[serde(default = "default_arrow_angle")]
    pub head_angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            head_length: default_arrow_length(),
            head_angle_degrees: default_arrow_angle(),
        }
    }
}

/// Hit testing and selection outline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// Extra clickable margin around elements in screen pixels (valid range: 0.0 - 50.0)
    /// The same margin separates the selection outline from the element
    #[serde(default = "default_hit_padding")]
    pub hit_padding: f64,

    /// Color of the dashed selection outline
    #[serde(default = "default_selection_color")]
    pub color: ColorSpec,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            hit_padding: default_hit_padding(),
            color: default_selection_color(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept for undo (0 = unlimited)
    #[serde(default)]
    pub max_entries: usize,
}

/// Screen-space overlays.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the zoom percentage in the bottom-left corner
    #[serde(default = "default_true")]
    pub show_zoom_indicator: bool,

    /// Outline the eraser footprint under the pointer while the eraser is active
    #[serde(default = "default_true")]
    pub show_eraser_cursor: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_zoom_indicator: true,
            show_eraser_cursor: true,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> String {
    "freehand".to_string()
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_arrow_length() -> f64 {
    15.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_hit_padding() -> f64 {
    10.0
}

fn default_selection_color() -> ColorSpec {
    ColorSpec::Name("#1971c2".to_string())
}

fn default_true() -> bool {
    true
}
