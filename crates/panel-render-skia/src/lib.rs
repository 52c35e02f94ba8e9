// File: crates/panel-render-skia/src/lib.rs
// Summary: Skia backend for panel-core: canvas surface, text shaping, raster output.

pub mod error;
pub mod raster;
pub mod surface;
pub mod text;

pub use error::RenderError;
pub use raster::{RgbaFrame, SkiaRenderer};
pub use surface::{to_skia, SkiaSurface};
pub use text::TextShaper;
