//! TEA messages

use spamscope_core::types::{ExampleKind, NotificationKind, Section};
use spamscope_core::Prediction;

use crate::input_key::InputKey;

/// All state transitions flow through these messages.
///
/// Keyboard input arrives as `Key`; the key handler translates it into the
/// semantic messages below, which the tests drive directly.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw keyboard input from the terminal
    Key(InputKey),

    /// Periodic tick driving notification timers and animations
    Tick,

    /// Request application exit
    Quit,

    // ─────────────────────────────────────────────────────────────
    // Section routing
    // ─────────────────────────────────────────────────────────────
    /// Activate a section and push the previous one onto history
    ShowSection(Section),

    /// Cycle to the next section in display order
    NextSection,

    /// Cycle to the previous section in display order
    PrevSection,

    /// Re-activate the most recently left section
    NavigateBack,

    /// Undo the most recent back navigation
    NavigateForward,

    // ─────────────────────────────────────────────────────────────
    // Classifier form
    // ─────────────────────────────────────────────────────────────
    /// Replace the input text with a canned example
    LoadExample(ExampleKind),

    /// Clear the input text
    ClearText,

    /// Validate the input and, if valid, start a prediction request
    Submit,

    /// Outcome of an in-flight prediction request
    PredictionReceived {
        result: std::result::Result<Prediction, String>,
    },

    // ─────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────
    /// Show a toast, replacing any currently visible one
    Notify {
        message: String,
        kind: NotificationKind,
    },
}
