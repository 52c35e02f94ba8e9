// File: crates/panel-core/src/placement.rs
// Summary: Maps one series' samples to pixel coordinates for a given panel size.
// Notes:
// - min/max are scanned once at construction; samples never change afterwards.
// - Points are cached per size and only recomputed when the size changes.

use tracing::debug;

use crate::error::PanelError;
use crate::geometry::{Point, Size};

/// Size a placement assumes before the first real layout pass.
pub const DEFAULT_SIZE: Size = Size::new(1000, 800);

#[derive(Clone, Debug)]
pub struct SeriesPlacement {
    samples: Vec<f64>,
    min_value: f64,
    max_value: f64,
    value_span: f64,
    size: Size,
    pixels_per_value: f64,
    points: Vec<Point>,
}

impl SeriesPlacement {
    /// Scan `samples` for extrema and lay them out at [`DEFAULT_SIZE`].
    pub fn new(samples: Vec<f64>) -> Result<Self, PanelError> {
        let (min_value, max_value) = min_max(&samples)?;
        let mut placement = Self {
            samples,
            min_value,
            max_value,
            value_span: max_value - min_value,
            size: DEFAULT_SIZE,
            pixels_per_value: 0.0,
            points: Vec::new(),
        };
        placement.recompute();
        Ok(placement)
    }

    /// Lay the series out for `size`. Returns whether the points were recomputed.
    pub fn apply_size(&mut self, size: Size) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.recompute();
        true
    }

    /// Pixel coordinates, one per sample, in sample order.
    pub fn points(&self) -> &[Point] { &self.points }

    pub fn samples(&self) -> &[f64] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn min_value(&self) -> f64 { self.min_value }
    pub fn max_value(&self) -> f64 { self.max_value }
    pub fn value_span(&self) -> f64 { self.value_span }
    pub fn size(&self) -> Size { self.size }
    pub fn pixels_per_value(&self) -> f64 { self.pixels_per_value }

    fn recompute(&mut self) {
        let width = self.size.width as f64;
        let height = self.size.height as f64;
        let n = self.samples.len();

        // A lone sample has no spacing; it is centered horizontally instead.
        self.pixels_per_value = if n > 1 { width / (n - 1) as f64 } else { 0.0 };

        self.points = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = if n > 1 { self.pixels_per_value * i as f64 } else { width / 2.0 };
                let y = if self.value_span > 0.0 {
                    let frac = (v - self.min_value) / self.value_span;
                    height - frac * height
                } else {
                    height / 2.0
                };
                // `as` truncates toward zero
                Point::new(x as i32, y as i32)
            })
            .collect();

        debug!(
            samples = n,
            width = self.size.width,
            height = self.size.height,
            "recomputed series placement"
        );
    }
}

fn min_max(samples: &[f64]) -> Result<(f64, f64), PanelError> {
    if samples.is_empty() {
        return Err(PanelError::EmptySeries);
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (index, &value) in samples.iter().enumerate() {
        if !value.is_finite() {
            return Err(PanelError::NonFiniteSample { index, value });
        }
        lo = lo.min(value);
        hi = hi.max(value);
    }
    Ok((lo, hi))
}
