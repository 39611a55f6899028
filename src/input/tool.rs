//! Drawing tool selection.

use crate::draw::{Color, StrokeStyle};
use std::fmt;
use std::str::FromStr;

/// Eraser strokes are this many times wider than the configured stroke width.
pub const ERASER_WIDTH_MULTIPLIER: f64 = 4.0;

/// Active tool chosen by the host toolbar or a keybinding.
///
/// The active tool determines what a primary-button drag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Select and drag existing elements
    Select,
    /// Freehand pencil (default)
    #[default]
    Freehand,
    /// Freehand stroke painted in the background color
    Eraser,
    /// Straight line between press and release points
    Line,
    /// Line with a filled head at the release point
    Arrow,
    /// Rectangle from press corner to release corner
    Rectangle,
    /// Circle centered on the press point
    Ellipse,
    /// Click to place text, type, press Enter
    Text,
}

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Select,
        Tool::Freehand,
        Tool::Eraser,
        Tool::Line,
        Tool::Arrow,
        Tool::Rectangle,
        Tool::Ellipse,
        Tool::Text,
    ];

    /// Style a new element of this tool is created with.
    ///
    /// The eraser paints with the background color at
    /// [`ERASER_WIDTH_MULTIPLIER`] times the configured width.
    pub fn stroke_style(&self, color: Color, width: f64, background: Color) -> StrokeStyle {
        match self {
            Tool::Eraser => StrokeStyle::new(background, width * ERASER_WIDTH_MULTIPLIER),
            _ => StrokeStyle::new(color, width),
        }
    }

    /// Name used in config files and scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Freehand => "freehand",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Arrow => "arrow",
            Tool::Rectangle => "rectangle",
            Tool::Ellipse => "ellipse",
            Tool::Text => "text",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(Tool::Select),
            "freehand" | "pencil" | "pen" => Ok(Tool::Freehand),
            "eraser" => Ok(Tool::Eraser),
            "line" => Ok(Tool::Line),
            "arrow" => Ok(Tool::Arrow),
            "rectangle" | "rect" => Ok(Tool::Rectangle),
            "ellipse" | "circle" => Ok(Tool::Ellipse),
            "text" => Ok(Tool::Text),
            other => Err(format!("Unknown tool '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn eraser_uses_background_at_four_times_width() {
        let style = Tool::Eraser.stroke_style(RED, 3.0, WHITE);
        assert_eq!(style.color, WHITE);
        assert_eq!(style.width, 12.0);

        let pencil = Tool::Freehand.stroke_style(RED, 3.0, WHITE);
        assert_eq!(pencil, StrokeStyle::new(RED, 3.0));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>().unwrap(), tool);
        }
        assert_eq!("circle".parse::<Tool>().unwrap(), Tool::Ellipse);
        assert!("lasso".parse::<Tool>().is_err());
    }
}
