// File: crates/window-demo/src/main.rs
// Summary: Windowed chart panel: winit drives pointer/key events, Skia renders, softbuffer blits.
// Keys: arrows nudge the guides, v/h/t/k toggle guides/tips/legend, m hides the cursor,
// 0-9 toggle series, x maximizes, q quits.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use panel_core::{ChartPanel, Key, PanelHost, Point, Size};
use panel_demo::{build_panel, init_tracing, load_series_csv, resolve_style, sample_data};
use panel_render_skia::SkiaRenderer;
use tracing::{debug, error, info};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

#[derive(Parser, Debug)]
#[command(name = "panel-window-demo", about = "Interactive chart panel window")]
struct Args {
    /// CSV with a header row; numeric columns become series.
    input: Option<PathBuf>,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    #[arg(long, default_value = "dark")]
    theme: String,
    #[arg(long)]
    style: Option<PathBuf>,
    #[arg(long)]
    tips_column: Option<String>,
}

/// Frame control backed by the winit window.
struct WindowHost<'a> {
    window: &'a Window,
    exit: bool,
}

impl PanelHost for WindowHost<'_> {
    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }
    fn close(&mut self) {
        self.exit = true;
    }
    fn toggle_maximized(&mut self) {
        self.window.set_maximized(!self.window.is_maximized());
    }
    fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }
}

fn map_key(code: VirtualKeyCode) -> Option<Key> {
    match code {
        VirtualKeyCode::Left => Some(Key::Left),
        VirtualKeyCode::Right => Some(Key::Right),
        VirtualKeyCode::Up => Some(Key::Up),
        VirtualKeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let data = match &args.input {
        Some(path) => load_series_csv(path, args.tips_column.as_deref())?,
        None => {
            let mut d = sample_data();
            d.tips = (0..10).map(|i| format!("Sample {i}")).collect();
            d
        }
    };
    let style = resolve_style(&args.theme, args.style.as_ref())?;
    let mut panel = build_panel(data, style)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Chart Panel")
        .with_inner_size(winit::dpi::PhysicalSize::new(args.width, args.height))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let renderer = SkiaRenderer::new();

    let inner = window.inner_size();
    panel.resize(Size::new(inner.width, inner.height));
    info!(width = inner.width, height = inner.height, series = panel.series_count(), "window ready");

    event_loop.run(move |event, _, control_flow| {
        // the softbuffer context must outlive the surface
        let _ = &context;
        *control_flow = ControlFlow::Wait;
        let mut host = WindowHost { window: &window, exit: false };

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => host.exit = true,
                WindowEvent::Resized(new_size) => {
                    panel.resize(Size::new(new_size.width, new_size.height));
                    host.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    panel.on_pointer_move(Point::new(position.x as i32, position.y as i32), &mut host);
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(code), .. },
                    ..
                } => {
                    if let Some(key) = map_key(code) {
                        panel.on_key(key, &mut host);
                    }
                }
                WindowEvent::ReceivedCharacter(c) => {
                    panel.on_key(Key::Char(c), &mut host);
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&mut panel, &renderer, &mut surface, &window) {
                    error!(error = %e, "frame failed");
                }
            }
            _ => {}
        }

        if host.exit {
            debug!("closing window");
            *control_flow = ControlFlow::Exit;
        }
    });
}

fn draw(
    panel: &mut ChartPanel,
    renderer: &SkiaRenderer,
    surface: &mut softbuffer::Surface,
    window: &Window,
) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // minimized
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;

    let frame = renderer.render_to_rgba8(panel, Size::new(size.width, size.height))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    for (dst, src) in buffer.iter_mut().zip(frame.to_argb_u32()) {
        *dst = src;
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
