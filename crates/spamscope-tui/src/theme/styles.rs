//! Semantic style builders for the Spamscope theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use spamscope_app::form::ResultStyle;
use spamscope_core::types::NotificationKind;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the focused control and the active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Pressed-control flash, shown briefly after activation
pub fn pressed() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn panel_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Result panel styling ---

/// `(Style, border Style)` for a result panel flavor.
pub fn result_styles(style: ResultStyle) -> (Style, Style) {
    let color = match style {
        ResultStyle::Spam => palette::RESULT_SPAM,
        ResultStyle::Ham => palette::RESULT_HAM,
        ResultStyle::Error => palette::RESULT_ERROR,
    };
    (
        Style::default().fg(color).add_modifier(Modifier::BOLD),
        Style::default().fg(color),
    )
}

// --- Toast styling ---

/// Background/foreground style for a toast of the given severity.
pub fn toast_style(kind: NotificationKind) -> Style {
    let bg = match kind {
        NotificationKind::Success => palette::TOAST_SUCCESS_BG,
        NotificationKind::Error => palette::TOAST_ERROR_BG,
        NotificationKind::Info => palette::TOAST_INFO_BG,
    };
    Style::default()
        .fg(palette::TOAST_FG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Dimmed variant used while a toast slides out.
pub fn toast_leaving_style(kind: NotificationKind) -> Style {
    let fg = match kind {
        NotificationKind::Success => palette::TOAST_SUCCESS_BG,
        NotificationKind::Error => palette::TOAST_ERROR_BG,
        NotificationKind::Info => palette::TOAST_INFO_BG,
    };
    Style::default().fg(fg)
}
