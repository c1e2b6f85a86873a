//! Closed domain enumerations for sections, examples, and toast kinds
//!
//! Section ids and example keys are fixed sets, so they are modelled as
//! enums rather than string lookups. An unknown fragment simply fails to
//! parse; it never produces a runtime error path.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

/// One top-level content panel, shown exclusively of the others.
///
/// The fragment form (`home`, `classifier`, `about`) is the deep-link
/// identifier carried on the command line, mirroring the URL fragment of
/// the original single-page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Classifier,
    About,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 3] = [Section::Home, Section::Classifier, Section::About];

    /// Parse a deep-link fragment. Unknown fragments return `None`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        match fragment {
            "home" => Some(Section::Home),
            "classifier" => Some(Section::Classifier),
            "about" => Some(Section::About),
            _ => None,
        }
    }

    /// The fragment identifier for this section.
    pub fn fragment(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Classifier => "classifier",
            Section::About => "about",
        }
    }

    /// Human-readable tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Classifier => "Classifier",
            Section::About => "About",
        }
    }

    /// Next section in display order (wraps around).
    pub fn next(&self) -> Self {
        match self {
            Section::Home => Section::Classifier,
            Section::Classifier => Section::About,
            Section::About => Section::Home,
        }
    }

    /// Previous section in display order (wraps around).
    pub fn prev(&self) -> Self {
        match self {
            Section::Home => Section::About,
            Section::Classifier => Section::Home,
            Section::About => Section::Classifier,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Example texts
// ─────────────────────────────────────────────────────────────────────────────

/// Canned spam example, loaded into the input on request.
pub const SPAM_EXAMPLE: &str = "URGENT! You've won $1,000,000! Click here to claim your prize NOW! \
This is a limited time offer. Don't miss this amazing opportunity to become a millionaire! \
Call 1-800-123-4567 immediately!";

/// Canned legitimate (ham) example.
pub const HAM_EXAMPLE: &str = "Hi John, thanks for sending the meeting notes from yesterday. \
I've reviewed them and have some comments. Could we schedule a quick call tomorrow at 2 PM \
to discuss? Best regards, Sarah";

/// Which canned example text to load into the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKind {
    Spam,
    Ham,
}

impl ExampleKind {
    /// The full canned text for this example.
    pub fn text(&self) -> &'static str {
        match self {
            ExampleKind::Spam => SPAM_EXAMPLE,
            ExampleKind::Ham => HAM_EXAMPLE,
        }
    }

    /// Lowercase label used in the "Loaded {label} example" notification.
    pub fn label(&self) -> &'static str {
        match self {
            ExampleKind::Spam => "spam",
            ExampleKind::Ham => "ham",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of a toast notification. Determines the visual style only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}
