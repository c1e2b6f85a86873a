//! Screen layout definitions for the TUI
//!
//! Splits the screen into a fixed-height header (title + section tabs) and
//! the body that renders the active section.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header area (title + section tabs + keybindings)
    pub header: Rect,

    /// Body area for the active section
    pub body: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    // Header: top border + title row + bottom border
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
    }
}

/// Area for the toast overlay, anchored to the top-right corner of the body.
pub fn toast_area(area: Rect, message_width: u16) -> Rect {
    let width = (message_width + 4).min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: 3.min(area.height),
    }
}
