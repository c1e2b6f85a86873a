//! Result panel widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use spamscope_app::form::ResultPanel;

use crate::theme::styles;

/// Renders a classification outcome or error panel.
pub struct ResultPanelWidget<'a> {
    panel: &'a ResultPanel,
}

impl<'a> ResultPanelWidget<'a> {
    pub fn new(panel: &'a ResultPanel) -> Self {
        Self { panel }
    }
}

impl Widget for ResultPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (headline_style, border_style) = styles::result_styles(self.panel.style);

        let block = styles::panel_block(false)
            .border_style(border_style)
            .title(" Result ");

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw(self.panel.icon),
                Span::raw(" "),
                Span::styled(self.panel.headline, headline_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                self.panel.detail.clone(),
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                self.panel.timestamp.clone(),
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
