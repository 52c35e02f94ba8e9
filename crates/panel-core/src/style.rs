// File: crates/panel-core/src/style.rs
// Summary: Colors, fonts and panel display configuration with named presets.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// 8-bit RGBA color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(192, 192, 192);
}

/// Font request handed to the surface; the backend resolves the family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, bold: bool) -> Self {
        Self { family: family.into(), size, bold }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", 20.0, true)
    }
}

pub const DEFAULT_BACKGROUND: Rgba = Rgba::BLACK;
pub const DEFAULT_SERIES_COLOR: Rgba = Rgba::WHITE;
pub const DEFAULT_VERTICAL_GUIDE_COLOR: Rgba = Rgba::GREEN;
pub const DEFAULT_HORIZONTAL_GUIDE_COLOR: Rgba = Rgba::GREEN;
pub const DEFAULT_TIP_COLOR: Rgba = Rgba::GREEN;
pub const DEFAULT_TIP_POSITION: Point = Point::new(0, 20);
pub const DEFAULT_LEGEND_POSITION: Point = Point::new(0, 45);
/// Vertical distance between legend rows, in pixels.
pub const DEFAULT_LEGEND_ROW_DELTA: i32 = 25;

/// Everything about how the panel looks, minus the series themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    pub name: String,
    pub background: Rgba,
    pub vertical_guide_color: Rgba,
    pub horizontal_guide_color: Rgba,
    pub tip_color: Rgba,
    pub tip_font: FontSpec,
    pub tip_position: Point,
    pub legend_font: FontSpec,
    pub legend_position: Point,
    pub legend_row_delta: i32,
    pub show_tips: bool,
    pub show_vertical_guide: bool,
    pub show_horizontal_guide: bool,
    pub show_legend: bool,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::dark()
    }
}

impl PanelStyle {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: DEFAULT_BACKGROUND,
            vertical_guide_color: DEFAULT_VERTICAL_GUIDE_COLOR,
            horizontal_guide_color: DEFAULT_HORIZONTAL_GUIDE_COLOR,
            tip_color: DEFAULT_TIP_COLOR,
            tip_font: FontSpec::default(),
            tip_position: DEFAULT_TIP_POSITION,
            legend_font: FontSpec::default(),
            legend_position: DEFAULT_LEGEND_POSITION,
            legend_row_delta: DEFAULT_LEGEND_ROW_DELTA,
            show_tips: true,
            show_vertical_guide: true,
            show_horizontal_guide: true,
            show_legend: true,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Rgba::rgb(250, 250, 252),
            vertical_guide_color: Rgba::rgb(30, 120, 240),
            horizontal_guide_color: Rgba::rgb(30, 120, 240),
            tip_color: Rgba::rgb(20, 20, 30),
            ..Self::dark()
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            vertical_guide_color: Rgba::rgb(0xff, 0xff, 0x00),
            horizontal_guide_color: Rgba::rgb(0xff, 0xff, 0x00),
            tip_color: Rgba::rgb(0xff, 0xff, 0xff),
            tip_font: FontSpec::new("Arial", 24.0, true),
            legend_font: FontSpec::new("Arial", 24.0, true),
            legend_row_delta: 30,
            ..Self::dark()
        }
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<PanelStyle> {
    vec![PanelStyle::dark(), PanelStyle::light(), PanelStyle::high_contrast()]
}

/// Find a style by its `name`, falling back to dark.
pub fn find(name: &str) -> PanelStyle {
    presets()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(PanelStyle::dark)
}

/// Series colors handed out by hosts that don't pick their own.
pub const SERIES_PALETTE: [Rgba; 6] = [
    Rgba::RED,
    Rgba::LIGHT_GRAY,
    Rgba::rgb(64, 160, 255),
    Rgba::rgb(40, 200, 120),
    Rgba::rgb(255, 230, 70),
    Rgba::rgb(200, 120, 255),
];

pub fn palette_color(i: usize) -> Rgba {
    SERIES_PALETTE[i % SERIES_PALETTE.len()]
}
