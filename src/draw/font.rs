//! Font descriptor for text elements.

/// Font configuration for text rendering.
///
/// Text elements only store their stroke width; the family, weight and style
/// come from the `[drawing]` config section and apply to every text element.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light")
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl FontDescriptor {
    pub fn new(
        family: impl Into<String>,
        weight: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Builds the Pango description for a given pixel size.
    ///
    /// Pango point sizes depend on the output resolution, so the size is set
    /// in absolute device units to keep `stroke_width × 8` exact on screen.
    pub fn to_pango(&self, size_px: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(size_px.max(1.0) * pango::SCALE as f64);
        desc
    }

    /// Converts this descriptor to a Pango description string without size.
    ///
    /// Format: "Family Style Weight", e.g. "Sans Bold" or "Monospace Italic".
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }
        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal", "normal")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_is_plain_sans() {
        assert_eq!(FontDescriptor::default().to_pango_string(), "Sans");
    }

    #[test]
    fn style_precedes_weight() {
        let font = FontDescriptor::new("JetBrains Mono", "bold", "italic");
        assert_eq!(font.to_pango_string(), "JetBrains Mono Italic Bold");
    }

    #[test]
    fn absolute_size_is_in_pango_units() {
        let desc = FontDescriptor::default().to_pango(16.0);
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 16 * pango::SCALE);
    }
}
