use cairo::{Context, ImageSurface};
use canvasboard::draw::{FontDescriptor, color};
use canvasboard::geometry::Point;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn alpha_at(surface: &mut ImageSurface, x: i32, y: i32) -> u8 {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    data[y as usize * stride + x as usize * 4 + 3]
}

#[test]
fn zoom_indicator_draws_in_bottom_left() {
    let (mut surface, ctx) = surface_with_context(200, 100);
    canvasboard::ui::render_zoom_indicator(&ctx, 150, 100);
    drop(ctx);

    assert!(surface_has_pixels(&mut surface));
    assert_eq!(alpha_at(&mut surface, 190, 5), 0);
    assert!(alpha_at(&mut surface, 12, 80) > 0);
}

#[test]
fn eraser_cursor_is_a_ring() {
    let (mut surface, ctx) = surface_with_context(40, 40);
    canvasboard::ui::render_eraser_cursor(&ctx, Point::new(20.0, 20.0), 20.0);
    drop(ctx);

    assert!(alpha_at(&mut surface, 29, 20) > 0);
    assert_eq!(alpha_at(&mut surface, 20, 20), 0);
}

#[test]
fn text_editor_draws_border_and_caret() {
    let (mut surface, ctx) = surface_with_context(200, 80);
    canvasboard::ui::render_text_editor(
        &ctx,
        Point::new(20.0, 40.0),
        "",
        color::BLACK,
        16.0,
        &FontDescriptor::default(),
    );
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}
