//! Configuration file support for canvasboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/canvasboard/config.toml`. Settings include drawing defaults,
//! board background, arrow appearance, selection, history depth, UI overlays, and
//! keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{ArrowConfig, BoardConfig, DrawingConfig, HistoryConfig, SelectionConfig, UiConfig};

use crate::draw::{Color, FontDescriptor, RenderStyle, color};
use crate::input::Tool;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "rectangle"
/// default_color = "blue"
/// default_thickness = 4.0
///
/// [arrow]
/// head_length = 20.0
/// head_angle_degrees = 25.0
///
/// [history]
/// max_entries = 200
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Tool, color, thickness and font defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Board background
    #[serde(default)]
    pub board: BoardConfig,

    /// Arrowhead appearance
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Hit testing and selection outline
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Undo history depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Screen-space overlays
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `arrow.head_length`: 5.0 - 50.0
    /// - `arrow.head_angle_degrees`: 15.0 - 60.0
    /// - `selection.hit_padding`: 0.0 - 50.0
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = clamp_or(self.drawing.default_thickness, 1.0, 20.0, 2.0);
        }

        if !(5.0..=50.0).contains(&self.arrow.head_length) {
            warn!(
                "Invalid arrow head_length {:.1}, clamping to 5.0-50.0 range",
                self.arrow.head_length
            );
            self.arrow.head_length = clamp_or(self.arrow.head_length, 5.0, 50.0, 15.0);
        }

        if !(15.0..=60.0).contains(&self.arrow.head_angle_degrees) {
            warn!(
                "Invalid arrow head_angle_degrees {:.1}°, clamping to 15.0-60.0° range",
                self.arrow.head_angle_degrees
            );
            self.arrow.head_angle_degrees =
                clamp_or(self.arrow.head_angle_degrees, 15.0, 60.0, 30.0);
        }

        if !(0.0..=50.0).contains(&self.selection.hit_padding) {
            warn!(
                "Invalid selection hit_padding {:.1}, clamping to 0.0-50.0 range",
                self.selection.hit_padding
            );
            self.selection.hit_padding = clamp_or(self.selection.hit_padding, 0.0, 50.0, 10.0);
        }

        if self.drawing.default_tool.parse::<Tool>().is_err() {
            warn!(
                "Invalid default_tool '{}', falling back to 'freehand'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = Tool::Freehand.name().to_string();
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        for (field, spec, fallback) in [
            ("drawing.default_color", &mut self.drawing.default_color, "black"),
            ("board.background_color", &mut self.board.background_color, "white"),
            ("selection.color", &mut self.selection.color, "#1971c2"),
        ] {
            if !spec.is_valid() {
                warn!("Invalid {} {:?}, falling back to '{}'", field, spec, fallback);
                *spec = ColorSpec::from(fallback);
            }
        }
    }

    /// Tool active at startup.
    pub fn default_tool(&self) -> Tool {
        self.drawing.default_tool.parse().unwrap_or_default()
    }

    pub fn stroke_color(&self) -> Color {
        self.drawing.default_color.to_color_or(color::BLACK)
    }

    pub fn background_color(&self) -> Color {
        self.board.background_color.to_color_or(color::WHITE)
    }

    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
        )
    }

    /// Collects the appearance settings the renderer needs.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            background: self.background_color(),
            selection_color: self.selection.color.to_color_or(color::BLUE),
            selection_padding: self.selection.hit_padding,
            arrow_head_length: self.arrow.head_length,
            arrow_head_angle: self.arrow.head_angle_degrees,
            font: self.font(),
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/canvasboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("canvasboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Reads, parses and validates the config file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML at `config_path`.
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists there or it cannot be written.
    pub fn create_default_file(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                path.display()
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(path, default_config)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Created default config at {}", path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Clamps finite values into range and replaces NaN with `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
