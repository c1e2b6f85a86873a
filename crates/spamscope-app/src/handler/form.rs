//! Classifier form handlers: submission and prediction outcome

use spamscope_core::prelude::*;
use spamscope_core::types::NotificationKind;
use spamscope_core::Prediction;

use crate::form::ResultPanel;
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Minimum trimmed length accepted for analysis, in characters.
const MIN_INPUT_CHARS: usize = 10;

/// Validate the input and start a prediction request.
///
/// While a request is in flight further submissions are ignored outright,
/// so at most one request exists at a time.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.form.is_busy() {
        debug!("submit ignored, request already in flight");
        return UpdateResult::none();
    }

    let text = state.input.text().trim().to_string();
    if text.is_empty() {
        return UpdateResult::message(Message::Notify {
            message: "Please enter some text to analyze".to_string(),
            kind: NotificationKind::Error,
        });
    }
    if text.chars().count() < MIN_INPUT_CHARS {
        return UpdateResult::message(Message::Notify {
            message: "Please enter at least 10 characters".to_string(),
            kind: NotificationKind::Error,
        });
    }

    state.form.start_loading();
    info!(chars = text.chars().count(), "submitting text for classification");
    UpdateResult::action(UpdateAction::Classify { text })
}

/// Apply the outcome of a prediction request.
pub fn handle_prediction(
    state: &mut AppState,
    result: std::result::Result<Prediction, String>,
) -> UpdateResult {
    match result {
        Ok(prediction) if prediction.is_error() => {
            // The service answered but could not classify. Show the error
            // panel without a toast, matching a failed analysis rather than
            // a failed request.
            warn!("prediction service reported an analysis error");
            state
                .form
                .finish(ResultPanel::analysis_error(prediction.display_timestamp()));
            UpdateResult::none()
        }

        Ok(prediction) => {
            info!(
                label = %prediction.prediction,
                confidence = prediction.confidence,
                "classification received"
            );
            let toast = format!(
                "Email classified as {} with {:.1}% confidence",
                prediction.prediction,
                prediction.confidence_pct()
            );
            state.form.finish(ResultPanel::classification(&prediction));
            UpdateResult::message(Message::Notify {
                message: toast,
                kind: NotificationKind::Success,
            })
        }

        Err(err) => {
            error!(error = %err, "prediction request failed");
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            state.form.finish(ResultPanel::network_error(timestamp));
            UpdateResult::message(Message::Notify {
                message: "Error analyzing email. Please try again.".to_string(),
                kind: NotificationKind::Error,
            })
        }
    }
}
