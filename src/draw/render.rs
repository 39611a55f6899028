//! Cairo-based rendering of the scene.

use super::color::{self, Color};
use super::element::{Element, TEXT_SIZE_FACTOR};
use super::font::FontDescriptor;
use super::scene::Scene;
use crate::geometry::{self, Bounds, Point};
use crate::viewport::Viewport;

/// Opacity of shape previews while they are being drawn.
pub const PREVIEW_ALPHA: f64 = 0.5;

/// Selection outline width in screen pixels.
const SELECTION_LINE_WIDTH: f64 = 2.0;

/// Selection outline dash length in screen pixels.
const SELECTION_DASH: f64 = 5.0;

/// Appearance settings shared by every render pass.
///
/// Built from the loaded configuration; see `Config::render_style`.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub background: Color,
    pub selection_color: Color,
    /// Gap between an element's bounds and its selection outline, in screen pixels
    pub selection_padding: f64,
    pub arrow_head_length: f64,
    pub arrow_head_angle: f64,
    pub font: FontDescriptor,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: color::WHITE,
            selection_color: color::BLUE,
            selection_padding: geometry::DEFAULT_HIT_PADDING,
            arrow_head_length: geometry::DEFAULT_ARROW_HEAD_LENGTH,
            arrow_head_angle: geometry::DEFAULT_ARROW_HEAD_ANGLE,
            font: FontDescriptor::default(),
        }
    }
}

/// Redraws the whole scene onto `ctx`.
///
/// The pass is idempotent: it clears to the background color, then draws the
/// committed elements, the selection outline, and finally the in-progress
/// element under the viewport transform. Shape previews are composited at
/// [`PREVIEW_ALPHA`]; freehand previews are drawn at full strength.
pub fn render_scene(
    ctx: &cairo::Context,
    scene: &Scene,
    viewport: &Viewport,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;

    ctx.set_operator(cairo::Operator::Source);
    style.background.apply(ctx);
    ctx.paint()?;
    ctx.set_operator(cairo::Operator::Over);

    let pan = viewport.pan();
    ctx.translate(pan.x, pan.y);
    ctx.scale(viewport.zoom(), viewport.zoom());

    render_elements(ctx, scene.elements(), style);

    if let Some(selected) = scene.selected_element() {
        render_selection_box(ctx, selected.bounds(), viewport.zoom(), style);
    }

    if let Some(preview) = scene.in_progress() {
        if preview.fades_as_preview() {
            ctx.push_group();
            render_element(ctx, preview, style);
            ctx.pop_group_to_source()?;
            ctx.paint_with_alpha(PREVIEW_ALPHA)?;
        } else {
            render_element(ctx, preview, style);
        }
    }

    ctx.restore()?;
    Ok(())
}

/// Renders elements in painter's order (first = bottom layer).
pub fn render_elements(ctx: &cairo::Context, elements: &[Element], style: &RenderStyle) {
    for element in elements {
        render_element(ctx, element, style);
    }
}

/// Renders a single element in scene coordinates.
pub fn render_element(ctx: &cairo::Context, element: &Element, style: &RenderStyle) {
    match element {
        Element::Freehand {
            points,
            color,
            width,
        } => render_freehand(ctx, points, *color, *width),
        Element::Line {
            start,
            end,
            color,
            width,
        } => render_line(ctx, *start, *end, *color, *width),
        Element::Arrow {
            start,
            end,
            color,
            width,
        } => render_arrow(
            ctx,
            *start,
            *end,
            *color,
            *width,
            style.arrow_head_length,
            style.arrow_head_angle,
        ),
        Element::Rectangle {
            origin,
            width,
            height,
            color,
            stroke_width,
        } => render_rect(ctx, *origin, *width, *height, *color, *stroke_width),
        Element::Ellipse {
            center,
            radius,
            color,
            width,
        } => render_circle(ctx, *center, *radius, *color, *width),
        Element::Text {
            anchor,
            content,
            color,
            stroke_width,
        } => render_text(
            ctx,
            *anchor,
            content,
            *color,
            stroke_width * TEXT_SIZE_FACTOR,
            &style.font,
        ),
    }
}

/// Render freehand stroke (polyline through points)
///
/// A single-point stroke is drawn as a dot so click-only pencil input stays visible.
pub fn render_freehand(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let Some(first) = points.first() else {
        return;
    };

    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    if points.len() == 1 {
        ctx.line_to(first.x, first.y);
    }
    for point in &points[1..] {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, start: Point, end: Point, color: Color, width: f64) {
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();
}

/// Render a rectangle outline; negative sizes draw towards the origin
fn render_rect(
    ctx: &cairo::Context,
    origin: Point,
    width: f64,
    height: f64,
    color: Color,
    stroke_width: f64,
) {
    color.apply(ctx);
    ctx.set_line_width(stroke_width);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let bounds = Bounds::from_corners(origin, origin.offset(width, height));
    ctx.rectangle(bounds.x, bounds.y, bounds.width, bounds.height);
    let _ = ctx.stroke();
}

/// Render a circle outline
fn render_circle(ctx: &cairo::Context, center: Point, radius: f64, color: Color, width: f64) {
    color.apply(ctx);
    ctx.set_line_width(width);

    ctx.new_sub_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Render an arrow: the shaft plus a filled head at `end`
fn render_arrow(
    ctx: &cairo::Context,
    start: Point,
    end: Point,
    color: Color,
    width: f64,
    head_length: f64,
    head_angle: f64,
) {
    render_line(ctx, start, end, color, width);

    let [left, right] = geometry::arrowhead_points(start, end, head_length, head_angle);

    color.apply(ctx);
    ctx.move_to(end.x, end.y);
    ctx.line_to(left.x, left.y);
    ctx.line_to(right.x, right.y);
    ctx.close_path();
    let _ = ctx.fill();
}

/// Renders text with its baseline starting at `anchor` using Pango.
///
/// `size` is an absolute pixel size in scene units; the viewport scale on the
/// context takes care of zoom.
pub fn render_text(
    ctx: &cairo::Context,
    anchor: Point,
    text: &str,
    color: Color,
    size: f64,
    font: &FontDescriptor,
) {
    if ctx.save().is_err() {
        return;
    }

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.to_pango(size)));
    layout.set_text(text);

    // Pango lays out from the top-left corner; shift so the first baseline sits on the anchor
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(anchor.x, anchor.y - baseline);

    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}

/// Dashed outline around a selected element.
///
/// Line width, dash length, and padding are screen-space constants, divided
/// by the zoom because the context is already scaled.
fn render_selection_box(ctx: &cairo::Context, bounds: Bounds, zoom: f64, style: &RenderStyle) {
    if ctx.save().is_err() {
        return;
    }

    let outline = bounds.inflate(style.selection_padding / zoom);
    style.selection_color.apply(ctx);
    ctx.set_line_width(SELECTION_LINE_WIDTH / zoom);
    ctx.set_dash(&[SELECTION_DASH / zoom, SELECTION_DASH / zoom], 0.0);
    ctx.rectangle(outline.x, outline.y, outline.width, outline.height);
    let _ = ctx.stroke();

    let _ = ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::StrokeStyle;
    use crate::draw::color::BLACK;
    use crate::input::Tool;

    fn pixel(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> [u8; 4] {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y as usize * stride + x as usize * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    #[test]
    fn background_fills_every_pixel() {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_scene(&ctx, &Scene::new(), &Viewport::new(), &RenderStyle::default())
                .unwrap();
        }
        assert_eq!(pixel(&mut surface, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&mut surface, 19, 19), [255, 255, 255, 255]);
    }

    #[test]
    fn committed_stroke_is_drawn_under_pan() {
        let mut scene = Scene::new();
        scene.begin_element(Tool::Line, Point::new(0.0, 5.0), StrokeStyle::new(BLACK, 4.0));
        scene.update_element(Point::new(10.0, 5.0));
        scene.commit_element();

        let mut viewport = Viewport::new();
        viewport.set_pan(Point::new(10.0, 10.0));

        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 40, 40).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_scene(&ctx, &scene, &viewport, &RenderStyle::default()).unwrap();
        }
        // Scene (5, 5) lands on screen (15, 15)
        assert_eq!(pixel(&mut surface, 15, 15), [0, 0, 0, 255]);
        assert_eq!(pixel(&mut surface, 5, 5), [255, 255, 255, 255]);
    }
}
