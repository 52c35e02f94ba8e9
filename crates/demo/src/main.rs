// File: crates/demo/src/main.rs
// Summary: Demo renders CSV columns (or built-in sample series) to a PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use panel_core::{Point, Size};
use panel_demo::{build_panel, init_tracing, load_series_csv, resolve_style, sample_data};
use panel_render_skia::SkiaRenderer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "panel-demo", about = "Render series from a CSV file into a chart panel PNG")]
struct Args {
    /// CSV with a header row; numeric columns become series.
    input: Option<PathBuf>,
    /// Output PNG path.
    #[arg(short, long, default_value = "target/out/panel.png")]
    out: PathBuf,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Built-in style preset (dark, light, high-contrast).
    #[arg(long, default_value = "dark")]
    theme: String,
    /// JSON style file; overrides --theme.
    #[arg(long)]
    style: Option<PathBuf>,
    /// CSV column whose cells are used as tip labels.
    #[arg(long)]
    tips_column: Option<String>,
    /// Pointer position for guides and tip, as "x,y".
    #[arg(long, value_parser = parse_point)]
    pointer: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let data = match &args.input {
        Some(path) => load_series_csv(path, args.tips_column.as_deref())?,
        None => sample_data(),
    };
    if data.series.is_empty() {
        anyhow::bail!("no numeric columns loaded; check headers/delimiter.");
    }

    let style = resolve_style(&args.theme, args.style.as_ref())?;
    let mut panel = build_panel(data, style)?;
    if let Some(p) = args.pointer {
        panel.set_pointer(p);
    }

    let size = Size::new(args.width, args.height);
    SkiaRenderer::new()
        .render_to_png(&mut panel, size, &args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!(out = %args.out.display(), "wrote panel");
    println!("Wrote {}", args.out.display());
    Ok(())
}
