//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use spamscope_core::prelude::*;
use spamscope_core::types::NotificationKind;

use crate::message::Message;
use crate::state::{AppState, FormFocus, PRESS_FEEDBACK};

use super::{form, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.notifications.tick();
            if let Some((_, since)) = state.pressed {
                if Instant::now().duration_since(since) >= PRESS_FEEDBACK {
                    state.pressed = None;
                }
            }
            if state.form.is_busy() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Section routing
        // ─────────────────────────────────────────────────────────
        Message::ShowSection(section) => {
            state.router.activate(section);
            UpdateResult::none()
        }

        Message::NextSection => {
            let next = state.router.active().next();
            state.router.activate(next);
            UpdateResult::none()
        }

        Message::PrevSection => {
            let prev = state.router.active().prev();
            state.router.activate(prev);
            UpdateResult::none()
        }

        Message::NavigateBack => {
            state.router.go_back();
            UpdateResult::none()
        }

        Message::NavigateForward => {
            state.router.go_forward();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Classifier form
        // ─────────────────────────────────────────────────────────
        Message::LoadExample(kind) => {
            state.input.set_text(kind.text());
            state.focus = FormFocus::Input;
            debug!(example = kind.label(), "loaded example text");
            UpdateResult::message(Message::Notify {
                message: format!("Loaded {} example", kind.label()),
                kind: NotificationKind::Info,
            })
        }

        Message::ClearText => {
            state.input.clear();
            state.form.result = None;
            state.focus = FormFocus::Input;
            UpdateResult::message(Message::Notify {
                message: "Text cleared".to_string(),
                kind: NotificationKind::Info,
            })
        }

        Message::Submit => form::handle_submit(state),

        Message::PredictionReceived { result } => form::handle_prediction(state, result),

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::Notify { message, kind } => {
            state.notifications.notify(message, kind);
            UpdateResult::none()
        }
    }
}
