// File: crates/demo/src/lib.rs
// Summary: Shared demo plumbing: CSV series loading, style resolution, logging setup.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use panel_core::style::{self, palette_color, PanelStyle};
use panel_core::ChartPanel;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One numeric CSV column.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedSeries {
    pub name: String,
    pub samples: Vec<f64>,
}

/// Everything read from one CSV file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedData {
    pub series: Vec<LoadedSeries>,
    pub tips: Vec<String>,
}

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Series shown when no CSV is given.
pub fn sample_data() -> LoadedData {
    LoadedData {
        series: vec![
            LoadedSeries {
                name: "Series 1".into(),
                samples: vec![5.0, 7.0, 2.0, 1.5, 9.0, 4.0, 7.0, 7.0, 1.0, 3.0],
            },
            LoadedSeries {
                name: "Series 2".into(),
                samples: vec![100.0, 90.0, 110.0, 75.5, 30.0, 35.0, 20.0],
            },
        ],
        tips: Vec::new(),
    }
}

/// Read CSV with headers. Every column holding at least one number becomes a series
/// (non-numeric cells are skipped); `tips_column`, when named, supplies the tip labels.
pub fn load_series_reader<R: Read>(reader: R, tips_column: Option<&str>) -> Result<LoadedData> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();

    let tips_idx = match tips_column {
        Some(want) => Some(
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(want))
                .with_context(|| format!("tips column '{want}' not in headers {headers:?}"))?,
        ),
        None => None,
    };

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut tips = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        for (i, cell) in rec.iter().enumerate().take(headers.len()) {
            if Some(i) == tips_idx {
                tips.push(cell.trim().to_string());
                continue;
            }
            if let Ok(v) = cell.trim().parse::<f64>() {
                if v.is_finite() {
                    columns[i].push(v);
                }
            }
        }
    }

    let series = headers
        .into_iter()
        .zip(columns)
        .enumerate()
        .filter(|(i, _)| Some(*i) != tips_idx)
        .filter_map(|(_, (name, samples))| {
            if samples.is_empty() {
                warn!(column = %name, "skipping column without numeric values");
                None
            } else {
                Some(LoadedSeries { name, samples })
            }
        })
        .collect();

    Ok(LoadedData { series, tips })
}

pub fn load_series_csv(path: &Path, tips_column: Option<&str>) -> Result<LoadedData> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let data = load_series_reader(file, tips_column)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(path = %path.display(), series = data.series.len(), tips = data.tips.len(), "loaded CSV");
    Ok(data)
}

/// Preset by name, replaced wholesale by a JSON style file when given.
pub fn resolve_style(theme: &str, style_path: Option<&PathBuf>) -> Result<PanelStyle> {
    match style_path {
        Some(p) => {
            let raw = std::fs::read_to_string(p).with_context(|| format!("reading style {}", p.display()))?;
            let style: PanelStyle =
                serde_json::from_str(&raw).with_context(|| format!("parsing style {}", p.display()))?;
            Ok(style)
        }
        None => Ok(style::find(theme)),
    }
}

/// Build a panel holding `data`, colors cycling through the palette.
pub fn build_panel(data: LoadedData, style: PanelStyle) -> Result<ChartPanel> {
    let mut panel = ChartPanel::with_style(style);
    for (i, s) in data.series.into_iter().enumerate() {
        let id = panel
            .add_named_series(s.samples, s.name.clone(), palette_color(i))
            .with_context(|| format!("adding series '{}'", s.name))?;
        info!(%id, name = %s.name, "series ready");
    }
    panel.set_tips(data.tips);
    Ok(panel)
}
