//! RGBA color type, the toolbar palette, and name lookups.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use canvasboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color::new(0.0, 0.0, 1.0, 0.5);
/// assert_eq!(Color::from_hex("#ff0000"), Some(red));
/// assert!(semi_transparent_blue.a < 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Sets this color as the Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Palette (matches the toolbar swatches)
// ============================================================================

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// `#e03131`
pub const RED: Color = Color::new(224.0 / 255.0, 49.0 / 255.0, 49.0 / 255.0, 1.0);

/// `#2f9e44`
pub const GREEN: Color = Color::new(47.0 / 255.0, 158.0 / 255.0, 68.0 / 255.0, 1.0);

/// `#1971c2`, also used for the selection outline
pub const BLUE: Color = Color::new(25.0 / 255.0, 113.0 / 255.0, 194.0 / 255.0, 1.0);

/// `#f08c00`
pub const ORANGE: Color = Color::new(240.0 / 255.0, 140.0 / 255.0, 0.0, 1.0);

/// `#e64980`
pub const PINK: Color = Color::new(230.0 / 255.0, 73.0 / 255.0, 128.0 / 255.0, 1.0);

/// `#9c36b5`
pub const PURPLE: Color = Color::new(156.0 / 255.0, 54.0 / 255.0, 181.0 / 255.0, 1.0);

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

pub const GRAY: Color = Color::new(0.6, 0.6, 0.6, 1.0);

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the script reader.
/// Names are case-insensitive; `#rrggbb` strings are accepted as well.
pub fn name_to_color(name: &str) -> Option<Color> {
    if name.starts_with('#') {
        return Color::from_hex(name);
    }
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "purple" => Some(PURPLE),
        "white" => Some(WHITE),
        "gray" | "grey" => Some(GRAY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_palette_values() {
        assert_eq!(Color::from_hex("#1971c2"), Some(BLUE));
        assert_eq!(Color::from_hex("e03131"), Some(RED));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(name_to_color("Purple"), Some(PURPLE));
        assert_eq!(name_to_color("#000000"), Some(BLACK));
        assert!(name_to_color("chartreuse").is_none());
    }
}
