// File: crates/panel-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use panel_core::{ChartPanel, Point, Rgba, Size};
use panel_render_skia::{RenderError, SkiaRenderer};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

fn quiet_panel() -> ChartPanel {
    let mut panel = ChartPanel::new();
    panel.show_tips(false);
    panel.show_legend(false);
    panel.show_vertical_guide(false);
    panel.show_horizontal_guide(false);
    panel
}

#[test]
fn render_rgba8_buffer() {
    let mut panel = quiet_panel();
    let renderer = SkiaRenderer::new();
    let frame = renderer.render_to_rgba8(&mut panel, Size::new(64, 48)).expect("rgba render");
    assert_eq!(frame.width as usize * frame.height as usize * 4, frame.pixels.len());
    assert_eq!(frame.stride, frame.width as usize * 4);
    assert_eq!(frame.pixel(0, 0), BLACK);
}

#[test]
fn series_line_hits_its_midpoint() {
    let mut panel = quiet_panel();
    let id = panel.add_named_series(vec![1.0, 2.0], "diag", Rgba::RED).unwrap();
    let renderer = SkiaRenderer::new();

    let frame = renderer.render_to_rgba8(&mut panel, Size::new(100, 80)).unwrap();
    assert_eq!(frame.pixel(50, 40), RED);
    assert_eq!(frame.pixel(90, 70), BLACK);

    panel.toggle_series_visible(id);
    let frame = renderer.render_to_rgba8(&mut panel, Size::new(100, 80)).unwrap();
    assert_eq!(frame.pixel(50, 40), BLACK);
}

#[test]
fn vertical_guide_follows_pointer() {
    let mut panel = quiet_panel();
    panel.show_vertical_guide(true);
    panel.set_pointer(Point::new(30, 20));

    let frame = SkiaRenderer::new().render_to_rgba8(&mut panel, Size::new(64, 48)).unwrap();
    assert_eq!(frame.pixel(30, 5), GREEN);
    assert_eq!(frame.pixel(30, 40), GREEN);
    assert_eq!(frame.pixel(31, 5), BLACK);
}

#[test]
fn argb_packing_matches_pixels() {
    let mut panel = quiet_panel();
    panel.set_background(Rgba::rgb(1, 2, 3));
    let frame = SkiaRenderer::new().render_to_rgba8(&mut panel, Size::new(4, 4)).unwrap();
    assert!(frame.to_argb_u32().iter().all(|&w| w == 0xFF01_0203));
}

#[test]
fn empty_size_is_an_error() {
    let mut panel = quiet_panel();
    let err = SkiaRenderer::new().render_to_rgba8(&mut panel, Size::new(0, 10)).unwrap_err();
    assert!(matches!(err, RenderError::Surface { width: 0, height: 10 }));
}
