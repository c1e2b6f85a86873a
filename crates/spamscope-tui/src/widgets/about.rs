//! About section widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Static information panel about the classifier.
pub struct AboutSection;

impl Widget for AboutSection {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("About", styles::accent_bold())),
            Line::from(""),
            Line::from(Span::styled(
                "Classification happens on a backend service trained on",
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                "labelled email data. This client sends your text to the",
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                "service's /predict endpoint and renders the verdict with",
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                "its confidence score.",
                styles::text_secondary(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Nothing you submit is stored by this client.",
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
