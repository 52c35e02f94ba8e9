// File: crates/panel-core/src/lib.rs
// Summary: Core library entry point; exports the chart panel, series placement and host traits.

pub mod error;
pub mod geometry;
pub mod host;
pub mod panel;
pub mod placement;
pub mod style;
pub mod surface;

pub use error::PanelError;
pub use geometry::{Point, Rect, Size};
pub use host::{Key, KeyOutcome, PanelHost, RedrawCounter};
pub use panel::{ChartPanel, SeriesEntry, SeriesId};
pub use placement::SeriesPlacement;
pub use style::{FontSpec, PanelStyle, Rgba};
pub use surface::{DisplayList, DrawCommand, Surface};
