//! Toast notification overlay

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use spamscope_app::notification::{ActiveNotification, NotificationPhase};
use spamscope_core::types::NotificationKind;

use crate::theme::{icons, styles};

/// Renders the active toast in the top-right overlay slot.
pub struct Toast<'a> {
    notification: &'a ActiveNotification,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a ActiveNotification) -> Self {
        Self { notification }
    }

    /// Width needed for the toast content, for overlay positioning.
    /// Saturates at `u16::MAX`; the layout clamps to the screen anyway.
    pub fn content_width(&self) -> u16 {
        // icon + space + message
        u16::try_from(self.notification.message.chars().count() + 2).unwrap_or(u16::MAX)
    }
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => icons::ICON_SUCCESS,
        NotificationKind::Error => icons::ICON_ERROR,
        NotificationKind::Info => icons::ICON_INFO,
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The style fades during the slide-out phase
        let style = match self.notification.phase() {
            NotificationPhase::Visible => styles::toast_style(self.notification.kind),
            NotificationPhase::Leaving => styles::toast_leaving_style(self.notification.kind),
        };

        Clear.render(area, buf);

        let line = Line::from(vec![
            Span::raw(kind_icon(self.notification.kind)),
            Span::raw(" "),
            Span::raw(self.notification.message.as_str()),
        ]);

        Paragraph::new(line)
            .style(style)
            .alignment(Alignment::Center)
            .block(styles::panel_block(false).border_style(style))
            .render(area, buf);
    }
}
