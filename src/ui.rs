/// UI rendering: zoom indicator, eraser cursor, text editor overlay
///
/// Everything here draws in screen space, after the scene pass.
use crate::draw::{Color, FontDescriptor, color};
use crate::geometry::Point;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Distance of the zoom indicator from the surface edges
const INDICATOR_MARGIN: f64 = 10.0;
/// Padding between indicator text and its background
const INDICATOR_PADDING: f64 = 6.0;
/// Zoom indicator font size
const INDICATOR_FONT_SIZE: f64 = 12.0;
/// Outline width of the eraser footprint
const ERASER_CURSOR_LINE_WIDTH: f64 = 1.0;
/// Border around the text editor overlay
const EDITOR_BORDER_WIDTH: f64 = 2.0;
/// Gap between typed text and the editor border
const EDITOR_PADDING: f64 = 4.0;
/// Minimum editor width so an empty editor is still visible
const EDITOR_MIN_WIDTH: f64 = 40.0;

/// Render the zoom percentage in the bottom-left corner.
pub fn render_zoom_indicator(ctx: &cairo::Context, zoom_percent: u32, screen_height: i32) {
    let text = format!("{}%", zoom_percent);

    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    ctx.set_font_size(INDICATOR_FONT_SIZE);

    let extents = match ctx.text_extents(&text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!("Failed to measure zoom indicator text: {}, skipping", e);
            return;
        }
    };

    let x = INDICATOR_MARGIN;
    let baseline = screen_height as f64 - INDICATOR_MARGIN - INDICATOR_PADDING;

    ctx.set_source_rgba(1.0, 1.0, 1.0, 0.9);
    ctx.rectangle(
        x,
        baseline - extents.height() - INDICATOR_PADDING,
        extents.x_advance() + INDICATOR_PADDING * 2.0,
        extents.height() + INDICATOR_PADDING * 2.0,
    );
    let _ = ctx.fill_preserve();
    color::GRAY.apply(ctx);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();

    color::BLACK.with_alpha(0.8).apply(ctx);
    ctx.move_to(x + INDICATOR_PADDING, baseline);
    let _ = ctx.show_text(&text);
}

/// Render the eraser footprint as a thin circle under the pointer.
///
/// `diameter` is in screen pixels (eraser width × zoom).
pub fn render_eraser_cursor(ctx: &cairo::Context, center: Point, diameter: f64) {
    color::GRAY.apply(ctx);
    ctx.set_line_width(ERASER_CURSOR_LINE_WIDTH);
    ctx.new_sub_path();
    ctx.arc(
        center.x,
        center.y,
        (diameter / 2.0).max(1.0),
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.stroke();
}

/// Render the text being typed, with a caret and a blue border.
///
/// `anchor` is the screen position of the first baseline and `size` the
/// on-screen font size, so the preview matches the committed text.
pub fn render_text_editor(
    ctx: &cairo::Context,
    anchor: Point,
    buffer: &str,
    text_color: Color,
    size: f64,
    font: &FontDescriptor,
) {
    if ctx.save().is_err() {
        return;
    }

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.to_pango(size)));
    // Caret follows the last character
    layout.set_text(&format!("{}|", buffer));

    let (_ink, logical) = layout.pixel_extents();
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    let top = anchor.y - baseline;

    color::BLUE.apply(ctx);
    ctx.set_line_width(EDITOR_BORDER_WIDTH);
    ctx.rectangle(
        anchor.x - EDITOR_PADDING,
        top - EDITOR_PADDING,
        (logical.width() as f64).max(EDITOR_MIN_WIDTH) + EDITOR_PADDING * 2.0,
        logical.height() as f64 + EDITOR_PADDING * 2.0,
    );
    let _ = ctx.stroke();

    text_color.apply(ctx);
    ctx.move_to(anchor.x, top);
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}
