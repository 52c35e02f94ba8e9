// File: crates/panel-core/src/error.rs
// Summary: Error type for series construction.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    /// A series needs at least one sample to have a min/max.
    #[error("series has no samples")]
    EmptySeries,
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },
}
