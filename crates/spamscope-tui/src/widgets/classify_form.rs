//! Classifier form widget
//!
//! Renders the input area, the example/clear/submit controls, and below
//! them either the loading panel or the last result. The input shows a
//! cursor marker while focused; controls highlight on focus and flash
//! briefly when activated.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use spamscope_app::state::{AppState, FormFocus};

use crate::theme::styles;
use crate::widgets::{LoadingPanel, ResultPanelWidget};

/// The full classifier section: input, controls, and result area.
pub struct ClassifyForm<'a> {
    state: &'a AppState,
}

impl<'a> ClassifyForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn control_style(&self, focus: FormFocus) -> Style {
        if self.state.is_pressed(focus) {
            styles::pressed()
        } else if self.state.focus == focus {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FormFocus::Input;
        let block = styles::panel_block(focused).title(" Email text ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Cursor marker only while the field is focused
        let text = self.state.input.text();
        let display = if focused {
            let cursor = self.state.input.cursor();
            let before: String = text.chars().take(cursor).collect();
            let after: String = text.chars().skip(cursor).collect();
            format!("{before}\u{2502}{after}")
        } else if text.is_empty() {
            "Paste or type an email to analyze...".to_string()
        } else {
            text.to_string()
        };

        let style = if text.is_empty() && !focused {
            styles::text_muted()
        } else {
            styles::text_primary()
        };

        Paragraph::new(display)
            .style(style)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                " Load Spam Example ",
                self.control_style(FormFocus::SpamExample),
            ),
            Span::raw("  "),
            Span::styled(
                " Load Ham Example ",
                self.control_style(FormFocus::HamExample),
            ),
            Span::raw("  "),
            Span::styled(" Clear ", self.control_style(FormFocus::Clear)),
            Span::raw("  "),
            Span::styled(" Analyze Email ", self.control_style(FormFocus::Submit)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Widget for ClassifyForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(8),  // Input
            Constraint::Length(1),  // Controls
            Constraint::Min(5),     // Loading or result
        ])
        .split(area);

        self.render_input(chunks[0], buf);
        self.render_controls(chunks[1], buf);

        // Spinner and result are mutually exclusive
        if self.state.form.is_busy() {
            LoadingPanel::new(self.state.animation_frame).render(chunks[2], buf);
        } else if let Some(panel) = &self.state.form.result {
            ResultPanelWidget::new(panel).render(chunks[2], buf);
        }
    }
}
