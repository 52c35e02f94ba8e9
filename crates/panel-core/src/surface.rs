// File: crates/panel-core/src/surface.rs
// Summary: Drawing primitives a host backend supplies, plus a recording surface.

use crate::geometry::{Point, Rect, Size};
use crate::style::{FontSpec, Rgba};

/// Minimal drawing target the panel paints onto.
pub trait Surface {
    /// Current pixel size of the drawable area.
    fn size(&self) -> Size;
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba);
    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, color: Rgba, font: &FontSpec);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Rgba },
    Line { from: Point, to: Point, color: Rgba },
    Text { text: String, origin: Point, color: Rgba, font: FontSpec },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct DisplayList {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: Size) -> Self {
        Self { size, commands: Vec::new() }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Line segments drawn in `color`.
    pub fn lines_in(&self, color: Rgba) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, color: c } if *c == color => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// All text draws as `(text, origin)` in paint order.
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Rgba, font: &FontSpec) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            color,
            font: font.clone(),
        });
    }
}
