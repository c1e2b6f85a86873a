//! Classification form state and result panels
//!
//! The form is either idle or has exactly one request in flight. While
//! loading, the spinner panel shows and the previous result is hidden;
//! when the request resolves, the result panel replaces the spinner.
//! The two are never shown together.

use spamscope_core::Prediction;

/// Whether a prediction request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
}

/// Visual flavor of a result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    Spam,
    Ham,
    Error,
}

/// A rendered classification outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub style: ResultStyle,
    pub icon: &'static str,
    pub headline: &'static str,
    /// Confidence line for classifications, explanation for errors.
    pub detail: String,
    /// Display-formatted timestamp.
    pub timestamp: String,
}

impl ResultPanel {
    /// Panel for a successful classification.
    pub fn classification(prediction: &Prediction) -> Self {
        let (style, icon, headline) = if prediction.is_spam {
            (ResultStyle::Spam, "🚫", "SPAM DETECTED!")
        } else {
            (ResultStyle::Ham, "✅", "LEGITIMATE EMAIL")
        };
        Self {
            style,
            icon,
            headline,
            detail: format!("Confidence: {:.2}%", prediction.confidence_pct()),
            timestamp: prediction.display_timestamp(),
        }
    }

    /// Panel shown when the service answered but could not classify.
    pub fn analysis_error(timestamp: String) -> Self {
        Self {
            style: ResultStyle::Error,
            icon: "❌",
            headline: "ANALYSIS ERROR",
            detail: "Unable to analyze the text".to_string(),
            timestamp,
        }
    }

    /// Panel shown when the request itself failed.
    pub fn network_error(timestamp: String) -> Self {
        Self {
            style: ResultStyle::Error,
            icon: "❌",
            headline: "NETWORK ERROR",
            detail: "Unable to connect to the server".to_string(),
            timestamp,
        }
    }
}

/// Classifier form state: request phase plus the last result, if any.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub phase: FormPhase,
    pub result: Option<ResultPanel>,
}

impl FormState {
    /// True while a request is in flight; submissions are ignored.
    pub fn is_busy(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    /// Enter the loading phase, hiding any previous result.
    pub fn start_loading(&mut self) {
        self.phase = FormPhase::Loading;
        self.result = None;
    }

    /// Leave the loading phase with a result to show.
    pub fn finish(&mut self, panel: ResultPanel) {
        self.phase = FormPhase::Idle;
        self.result = Some(panel);
    }
}
