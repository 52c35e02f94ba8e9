// File: crates/panel-render-skia/src/surface.rs
// Summary: panel_core::Surface implemented over a Skia canvas.

use panel_core::{FontSpec, Point, Rect, Rgba, Size, Surface};
use skia_safe as skia;

use crate::text::TextShaper;

#[inline]
pub fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Center of an integer pixel, so 1px strokes cover exactly one pixel column/row.
#[inline]
fn px(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    size: Size,
    text: &'a TextShaper,
    stroke: skia::Paint,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, size: Size, text: &'a TextShaper) -> Self {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(false);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        Self { canvas, size, text, stroke }
    }
}

impl Surface for SkiaSurface<'_> {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        self.canvas.draw_rect(r, &paint);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.stroke.set_color(to_skia(color));
        self.canvas.draw_line(px(from), px(to), &self.stroke);
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Rgba, font: &FontSpec) {
        self.text.draw_left(self.canvas, text, origin.x as f32, origin.y as f32, font, to_skia(color));
    }
}
