//! Home section widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Landing panel with a short pitch and navigation hints.
pub struct HomeSection;

impl Widget for HomeSection {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Email Spam Classifier",
                styles::accent_bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Paste an email, or load one of the examples, and find out",
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                "whether a machine learning model thinks it is spam.",
                styles::text_secondary(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                Span::styled("2", styles::keybinding()),
                Span::styled(" or ", styles::text_muted()),
                Span::styled("Tab", styles::keybinding()),
                Span::styled(" to open the classifier.", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
