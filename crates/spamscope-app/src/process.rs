//! Message processing and action dispatch
//!
//! Drives the TEA loop: each incoming message runs through
//! `handler::update()`, follow-up messages are drained in the same pass,
//! and side-effecting actions are spawned onto tokio tasks that report
//! back through the message channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use spamscope_client::PredictClient;
use spamscope_core::prelude::*;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<PredictClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Execute an action by spawning a background task
fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<PredictClient>) {
    match action {
        UpdateAction::Classify { text } => {
            tokio::spawn(async move {
                let result = client
                    .classify(&text)
                    .await
                    .map_err(|e| e.to_string());

                if msg_tx
                    .send(Message::PredictionReceived { result })
                    .await
                    .is_err()
                {
                    // Event loop already gone, nothing left to notify
                    warn!("message channel closed before prediction delivery");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use spamscope_core::types::{ExampleKind, Section};

    fn test_client() -> Arc<PredictClient> {
        Arc::new(
            PredictClient::new("http://127.0.0.1:9", std::time::Duration::from_millis(200))
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_follow_up_messages_are_drained() {
        let mut state = AppState::new(Settings::default());
        let (msg_tx, _msg_rx) = mpsc::channel(16);
        let client = test_client();

        // LoadExample produces a Notify follow-up; both must apply in one pass
        process_message(
            &mut state,
            Message::LoadExample(ExampleKind::Spam),
            &msg_tx,
            &client,
        );
        assert!(state.input.text().starts_with("URGENT!"));
        assert!(state.notifications.current().is_some());
    }

    #[tokio::test]
    async fn test_submit_spawns_request_and_reports_failure() {
        let mut state = AppState::new(Settings::default());
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        // Closed port, so the spawned request fails fast
        let client = test_client();

        state.input.set_text("this is long enough to analyze");
        process_message(&mut state, Message::Submit, &msg_tx, &client);
        assert!(state.form.is_busy());

        let reply = msg_rx.recv().await.expect("prediction outcome message");
        match reply {
            Message::PredictionReceived { result } => assert!(result.is_err()),
            other => panic!("expected PredictionReceived, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_prediction_failure_restores_idle_form() {
        let mut state = AppState::new(Settings::default());
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let client = test_client();

        state.input.set_text("this is long enough to analyze");
        process_message(&mut state, Message::Submit, &msg_tx, &client);
        let reply = msg_rx.recv().await.expect("prediction outcome message");
        process_message(&mut state, reply, &msg_tx, &client);

        assert!(!state.form.is_busy());
        assert_eq!(
            state.form.result.as_ref().unwrap().headline,
            "NETWORK ERROR"
        );
        assert_eq!(
            state.notifications.current().unwrap().message,
            "Error analyzing email. Please try again."
        );
    }

    #[tokio::test]
    async fn test_routing_messages_do_not_spawn_actions() {
        let mut state = AppState::new(Settings::default());
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let client = test_client();

        process_message(
            &mut state,
            Message::ShowSection(Section::About),
            &msg_tx,
            &client,
        );
        assert_eq!(state.router.active(), Section::About);
        assert!(msg_rx.try_recv().is_err());
    }
}
