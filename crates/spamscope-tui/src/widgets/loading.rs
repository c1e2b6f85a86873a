//! Loading panel shown while a prediction request is in flight

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons, styles};

/// Centered spinner with a status message.
pub struct LoadingPanel {
    frame: usize,
}

impl LoadingPanel {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }
}

impl Widget for LoadingPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(icons::spinner_frame(self.frame), styles::accent_bold()),
                Span::raw(" "),
                Span::styled("Analyzing email...", styles::text_secondary()),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
