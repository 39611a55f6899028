//! Configuration enum types.

use crate::draw::{Color, color::name_to_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a palette name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Palette name
/// default_color = "red"
///
/// # Hex string
/// default_color = "#1971c2"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (black, red, green, blue, orange, pink, purple, white, gray) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, falling back to `fallback` with a warning
    /// when a name is not recognized.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Whether the specification names a known color.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, RED};

    #[test]
    fn resolves_names_hex_and_rgb() {
        assert_eq!(ColorSpec::from("red").to_color_or(BLACK), RED);
        assert_eq!(ColorSpec::from("#1971c2").to_color_or(BLACK), BLUE);
        assert_eq!(
            ColorSpec::Rgb([255, 0, 0]).to_color_or(BLACK),
            Color::new(1.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn unknown_name_uses_fallback() {
        let spec = ColorSpec::from("mauve");
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color_or(BLUE), BLUE);
    }
}
