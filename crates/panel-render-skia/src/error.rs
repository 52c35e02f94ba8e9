// File: crates/panel-render-skia/src/error.rs
// Summary: Errors raised while rasterizing or encoding a panel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },
    #[error("failed to read back pixels")]
    ReadPixels,
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
