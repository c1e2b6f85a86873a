//! Color palette for the Spamscope theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Ham/success
pub const STATUS_RED: Color = Color::Red; // Spam/error
pub const STATUS_YELLOW: Color = Color::Yellow; // Keybinding hints
pub const STATUS_BLUE: Color = Color::Blue; // Info

// --- Result panels ---
pub const RESULT_SPAM: Color = Color::Red;
pub const RESULT_HAM: Color = Color::Green;
pub const RESULT_ERROR: Color = Color::LightRed;

// --- Toast notifications ---
pub const TOAST_SUCCESS_BG: Color = Color::Green;
pub const TOAST_ERROR_BG: Color = Color::Red;
pub const TOAST_INFO_BG: Color = Color::Blue;
pub const TOAST_FG: Color = Color::Black;
