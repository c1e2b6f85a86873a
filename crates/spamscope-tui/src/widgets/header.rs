//! Header bar widget
//!
//! Shows the app title, the section tabs, and keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use spamscope_core::types::Section;

use crate::theme::{palette, styles};

/// Main header with app title, section tabs, and keybindings
pub struct MainHeader {
    active: Section,
}

impl MainHeader {
    pub fn new(active: Section) -> Self {
        Self { active }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left: title + section tabs
        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled("Spamscope", styles::accent_bold()),
            Span::raw("  "),
        ];
        for section in Section::ALL {
            let style = if section == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            left_spans.push(Span::styled(format!(" {} ", section.title()), style));
            left_spans.push(Span::raw(" "));
        }
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right: keybinding hints, rendered only when they fit
        let hints = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled("] Section  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("^B", styles::keybinding()),
            Span::styled("] Back  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("^C", styles::keybinding()),
            Span::styled("] Quit ", styles::text_muted()),
        ]);
        let hints_width = hints.width() as u16;
        if left_width + hints_width + 2 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}
