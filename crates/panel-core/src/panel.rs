// File: crates/panel-core/src/panel.rs
// Summary: ChartPanel: owns named series, display state and pointer; paints onto a Surface.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::PanelError;
use crate::geometry::{saturating_i32, Point, Rect, Size};
use crate::host::{Key, KeyOutcome, PanelHost};
use crate::placement::{SeriesPlacement, DEFAULT_SIZE};
use crate::style::{FontSpec, PanelStyle, Rgba, DEFAULT_SERIES_COLOR};
use crate::surface::Surface;

/// Stable series handle. Handed out in increasing order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesId(pub u32);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct SeriesEntry {
    id: SeriesId,
    name: String,
    color: Rgba,
    visible: bool,
    placement: SeriesPlacement,
}

impl SeriesEntry {
    pub fn id(&self) -> SeriesId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn color(&self) -> Rgba { self.color }
    pub fn is_visible(&self) -> bool { self.visible }
    pub fn placement(&self) -> &SeriesPlacement { &self.placement }

    /// Text shown for this series in the legend.
    pub fn legend_label(&self) -> String {
        format!("{}: {}", self.id, self.name)
    }
}

pub struct ChartPanel {
    series: Vec<SeriesEntry>,
    next_id: u32,
    tips: Vec<String>,
    style: PanelStyle,
    size: Size,
    pointer: Point,
    cursor_hidden: bool,
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartPanel {
    pub fn new() -> Self {
        Self::with_style(PanelStyle::default())
    }

    pub fn with_style(style: PanelStyle) -> Self {
        Self {
            series: Vec::new(),
            next_id: 0,
            tips: Vec::new(),
            style,
            size: DEFAULT_SIZE,
            pointer: Point::default(),
            cursor_hidden: false,
        }
    }

    // ---- series -------------------------------------------------------------

    /// Add an unnamed series in the default series color.
    pub fn add_series(&mut self, samples: Vec<f64>) -> Result<SeriesId, PanelError> {
        self.add_named_series(samples, "", DEFAULT_SERIES_COLOR)
    }

    /// Add a series; on error the panel is unchanged and no id is consumed.
    pub fn add_named_series(
        &mut self,
        samples: Vec<f64>,
        name: impl Into<String>,
        color: Rgba,
    ) -> Result<SeriesId, PanelError> {
        let name = name.into();
        let placement = SeriesPlacement::new(samples).map_err(|e| {
            warn!(%name, error = %e, "rejected series");
            e
        })?;
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        debug!(%id, %name, samples = placement.len(), "added series");
        self.series.push(SeriesEntry { id, name, color, visible: true, placement });
        Ok(id)
    }

    pub fn remove_series(&mut self, id: SeriesId) -> bool {
        match self.series.iter().position(|s| s.id == id) {
            Some(pos) => {
                self.series.remove(pos);
                debug!(%id, "removed series");
                true
            }
            None => false,
        }
    }

    pub fn remove_all_series(&mut self) {
        debug!(count = self.series.len(), "removed all series");
        self.series.clear();
    }

    pub fn set_series_visible(&mut self, id: SeriesId, visible: bool) -> bool {
        self.entry_mut(id).map(|s| s.visible = visible).is_some()
    }

    pub fn toggle_series_visible(&mut self, id: SeriesId) -> bool {
        self.entry_mut(id).map(|s| s.visible = !s.visible).is_some()
    }

    pub fn set_series_color(&mut self, id: SeriesId, color: Rgba) -> bool {
        self.entry_mut(id).map(|s| s.color = color).is_some()
    }

    pub fn series(&self, id: SeriesId) -> Option<&SeriesEntry> {
        self.series.iter().find(|s| s.id == id)
    }

    /// Entries in insertion order.
    pub fn series_iter(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.series.iter()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    fn entry_mut(&mut self, id: SeriesId) -> Option<&mut SeriesEntry> {
        self.series.iter_mut().find(|s| s.id == id)
    }

    // ---- display state ------------------------------------------------------

    pub fn style(&self) -> &PanelStyle { &self.style }
    pub fn set_style(&mut self, style: PanelStyle) { self.style = style; }

    pub fn set_background(&mut self, color: Rgba) { self.style.background = color; }
    pub fn set_tip_color(&mut self, color: Rgba) { self.style.tip_color = color; }
    pub fn set_tip_font(&mut self, font: FontSpec) { self.style.tip_font = font; }
    pub fn set_tip_position(&mut self, position: Point) { self.style.tip_position = position; }
    pub fn show_tips(&mut self, show: bool) { self.style.show_tips = show; }
    pub fn show_vertical_guide(&mut self, show: bool) { self.style.show_vertical_guide = show; }
    pub fn set_vertical_guide_color(&mut self, color: Rgba) { self.style.vertical_guide_color = color; }
    pub fn show_horizontal_guide(&mut self, show: bool) { self.style.show_horizontal_guide = show; }
    pub fn set_horizontal_guide_color(&mut self, color: Rgba) { self.style.horizontal_guide_color = color; }
    pub fn show_legend(&mut self, show: bool) { self.style.show_legend = show; }
    pub fn set_legend_position(&mut self, position: Point) { self.style.legend_position = position; }
    pub fn set_legend_font(&mut self, font: FontSpec) { self.style.legend_font = font; }
    pub fn set_legend_row_delta(&mut self, delta: i32) { self.style.legend_row_delta = delta; }

    pub fn size(&self) -> Size { self.size }

    /// Record the panel size outside of a paint pass (tip lookup and arrow clamping use it).
    pub fn resize(&mut self, size: Size) { self.size = size; }

    pub fn pointer(&self) -> Point { self.pointer }
    pub fn set_pointer(&mut self, pointer: Point) { self.pointer = pointer; }
    pub fn is_cursor_hidden(&self) -> bool { self.cursor_hidden }

    // ---- tips ---------------------------------------------------------------

    pub fn set_tips(&mut self, tips: Vec<String>) { self.tips = tips; }
    pub fn clear_tips(&mut self) { self.tips.clear(); }
    pub fn tips(&self) -> &[String] { &self.tips }

    /// Tip label for a horizontal pointer position.
    ///
    /// The width is split into `N - 1` buckets and bucket `i` yields `tips[i + 1]`,
    /// so the first tip only shows when it is the sole tip.
    pub fn tip_at(&self, x: i32) -> &str {
        let n = self.tips.len();
        if n == 0 || x < 0 || x as i64 >= self.size.width as i64 {
            return "";
        }
        if n == 1 {
            return &self.tips[0];
        }
        let per_tip = self.size.width as f64 / (n - 1) as f64;
        let idx = (x as f64 / per_tip) as usize;
        self.tips.get(idx + 1).map(String::as_str).unwrap_or("")
    }

    // ---- painting -----------------------------------------------------------

    /// Paint the whole panel at the surface's current size.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let size = surface.size();
        self.size = size;
        let width = saturating_i32(size.width);
        let height = saturating_i32(size.height);

        surface.fill_rect(Rect::from_size(size), self.style.background);

        for s in &mut self.series {
            s.placement.apply_size(size);
        }

        for s in self.series.iter().filter(|s| s.visible) {
            for seg in s.placement.points().windows(2) {
                surface.draw_line(seg[0], seg[1], s.color);
            }
        }

        let pointer = self.pointer;

        if self.style.show_tips {
            let tip = self.tip_at(pointer.x);
            if !tip.is_empty() {
                surface.draw_text(tip, self.style.tip_position, self.style.tip_color, &self.style.tip_font);
            }
        }

        if self.style.show_vertical_guide {
            surface.draw_line(
                Point::new(pointer.x, 0),
                Point::new(pointer.x, height),
                self.style.vertical_guide_color,
            );
        }

        if self.style.show_horizontal_guide {
            surface.draw_line(
                Point::new(0, pointer.y),
                Point::new(width, pointer.y),
                self.style.horizontal_guide_color,
            );
        }

        if self.style.show_legend {
            let mut origin = self.style.legend_position;
            for s in &self.series {
                // hidden series keep their row so the rows stay in id order
                if s.visible {
                    surface.draw_text(&s.legend_label(), origin, s.color, &self.style.legend_font);
                }
                origin = origin.offset(0, self.style.legend_row_delta);
            }
        }
    }

    // ---- input --------------------------------------------------------------

    pub fn on_pointer_move<H: PanelHost + ?Sized>(&mut self, pointer: Point, host: &mut H) {
        trace!(x = pointer.x, y = pointer.y, "pointer moved");
        self.pointer = pointer;
        host.request_redraw();
    }

    pub fn on_key<H: PanelHost + ?Sized>(&mut self, key: Key, host: &mut H) -> KeyOutcome {
        let max_x = self.size.width as i64 - 1;
        let max_y = self.size.height as i64 - 1;
        let p = self.pointer;

        let outcome = match key {
            Key::Left => self.nudge(p.x > 0, -1, 0),
            Key::Right => self.nudge((p.x as i64) < max_x, 1, 0),
            Key::Up => self.nudge(p.y > 0, 0, -1),
            Key::Down => self.nudge((p.y as i64) < max_y, 0, 1),
            Key::Char('q') => {
                host.close();
                KeyOutcome::CloseRequested
            }
            Key::Char('x') => {
                host.toggle_maximized();
                KeyOutcome::MaximizeToggled
            }
            Key::Char('v') => {
                self.style.show_vertical_guide = !self.style.show_vertical_guide;
                KeyOutcome::ToggledVerticalGuide
            }
            Key::Char('h') => {
                self.style.show_horizontal_guide = !self.style.show_horizontal_guide;
                KeyOutcome::ToggledHorizontalGuide
            }
            Key::Char('t') => {
                self.style.show_tips = !self.style.show_tips;
                KeyOutcome::ToggledTips
            }
            Key::Char('k') => {
                self.style.show_legend = !self.style.show_legend;
                KeyOutcome::ToggledLegend
            }
            Key::Char('m') => {
                self.cursor_hidden = !self.cursor_hidden;
                host.set_cursor_visible(!self.cursor_hidden);
                KeyOutcome::ToggledCursor
            }
            Key::Char(c @ '0'..='9') => {
                let id = c as u32 - '0' as u32;
                let found = self.toggle_series_visible(SeriesId(id));
                KeyOutcome::ToggledSeries { id, found }
            }
            Key::Char(_) => KeyOutcome::Ignored,
        };

        if redraws(outcome) {
            host.request_redraw();
        }
        debug!(?key, ?outcome, "key handled");
        outcome
    }

    fn nudge(&mut self, allowed: bool, dx: i32, dy: i32) -> KeyOutcome {
        let moved = self.pointer.offset(dx, dy);
        if allowed && moved != self.pointer {
            self.pointer = moved;
            KeyOutcome::PointerNudged
        } else {
            KeyOutcome::PointerAtEdge
        }
    }
}

fn redraws(outcome: KeyOutcome) -> bool {
    matches!(
        outcome,
        KeyOutcome::PointerNudged
            | KeyOutcome::ToggledVerticalGuide
            | KeyOutcome::ToggledHorizontalGuide
            | KeyOutcome::ToggledTips
            | KeyOutcome::ToggledLegend
            | KeyOutcome::ToggledSeries { .. }
    )
}

