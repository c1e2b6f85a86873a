//! # spamscope-client - Prediction Service Client
//!
//! Thin async HTTP client for the classifier backend. One endpoint,
//! `POST /predict`, with a JSON request/response contract defined in
//! `spamscope-core::prediction`.
//!
//! The client owns the base URL and a configured `reqwest::Client`; all
//! failures map into `spamscope_core::Error` so callers can classify them
//! as recoverable or fatal.

pub mod client;

pub use client::PredictClient;
