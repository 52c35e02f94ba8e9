// File: crates/panel-render-skia/src/raster.rs
// Summary: Headless CPU raster rendering of a ChartPanel to RGBA buffers and PNG.

use panel_core::{ChartPanel, Size};
use skia_safe as skia;
use tracing::debug;

use crate::error::RenderError;
use crate::surface::SkiaSurface;
use crate::text::TextShaper;

/// Tightly packed, unpremultiplied RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl RgbaFrame {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = y as usize * self.stride + x as usize * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    /// Pack as `0xAARRGGBB` words, the layout softbuffer presents.
    pub fn to_argb_u32(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(4)
            .map(|px| {
                let (r, g, b, a) = (px[0] as u32, px[1] as u32, px[2] as u32, px[3] as u32);
                (a << 24) | (r << 16) | (g << 8) | b
            })
            .collect()
    }
}

/// Owns the font collection so repeated frames don't rebuild it.
pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    fn image_info(size: Size, alpha: skia::AlphaType) -> Result<skia::ImageInfo, RenderError> {
        let err = || RenderError::Surface { width: size.width, height: size.height };
        if size.is_empty() {
            return Err(err());
        }
        let w = i32::try_from(size.width).map_err(|_| err())?;
        let h = i32::try_from(size.height).map_err(|_| err())?;
        Ok(skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, alpha, None))
    }

    fn paint(&self, panel: &mut ChartPanel, size: Size) -> Result<skia::Surface, RenderError> {
        // raster surfaces must be premultiplied; unpremul happens on read-back
        let info = Self::image_info(size, skia::AlphaType::Premul)?;
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or(RenderError::Surface { width: size.width, height: size.height })?;
        {
            let canvas = surface.canvas();
            let mut target = SkiaSurface::new(canvas, size, &self.text);
            panel.render(&mut target);
        }
        debug!(width = size.width, height = size.height, "painted panel");
        Ok(surface)
    }

    /// Render into an RGBA8 buffer of `size`.
    pub fn render_to_rgba8(&self, panel: &mut ChartPanel, size: Size) -> Result<RgbaFrame, RenderError> {
        let mut surface = self.paint(panel, size)?;
        let info = Self::image_info(size, skia::AlphaType::Unpremul)?;
        let stride = info.min_row_bytes();
        let mut pixels = vec![0u8; stride * size.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok(RgbaFrame { pixels, width: size.width, height: size.height, stride })
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, panel: &mut ChartPanel, size: Size) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.paint(panel, size)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the panel to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        panel: &mut ChartPanel,
        size: Size,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(panel, size)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}
