// File: crates/panel-core/src/host.rs
// Summary: Capabilities the panel asks of its host window, and the keys it understands.

/// Callbacks into the host toolkit. Only repainting is mandatory; frame control
/// defaults to doing nothing when the panel isn't attached to a window.
pub trait PanelHost {
    /// Ask the host to schedule a repaint; fire-and-forget.
    fn request_redraw(&mut self);
    fn close(&mut self) {}
    fn toggle_maximized(&mut self) {}
    fn set_cursor_visible(&mut self, _visible: bool) {}
}

/// Host that only counts redraw requests. Handy headless and in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawCounter {
    pub redraws: u32,
}

impl PanelHost for RedrawCounter {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

/// Keyboard input already decoded by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// A typed character (toggles and series digits).
    Char(char),
}

/// What a key press did to the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Pointer moved by an arrow key.
    PointerNudged,
    /// Arrow key pressed at the panel edge; nothing changed.
    PointerAtEdge,
    ToggledVerticalGuide,
    ToggledHorizontalGuide,
    ToggledTips,
    ToggledLegend,
    ToggledCursor,
    /// Digit key; `found` is false when no series carries that id.
    ToggledSeries { id: u32, found: bool },
    CloseRequested,
    MaximizeToggled,
    Ignored,
}
