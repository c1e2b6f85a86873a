//! spamscope-app - Application state and orchestration for Spamscope
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: an [`AppState`] model, a [`Message`] enum, a pure
//! `handler::update()` function, and a `process` module that drains
//! follow-up messages and dispatches side-effecting actions (the HTTP
//! prediction request) onto tokio tasks.

pub mod config;
pub mod form;
pub mod handler;
pub mod input;
pub mod input_key;
pub mod message;
pub mod notification;
pub mod process;
pub mod router;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use form::{FormPhase, FormState, ResultPanel, ResultStyle};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notification::{ActiveNotification, NotificationPhase, NotificationState};
pub use router::SectionRouter;
pub use state::{AppState, FormFocus};
