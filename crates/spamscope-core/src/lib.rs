//! # spamscope-core - Core Domain Types
//!
//! Foundation crate for Spamscope. Provides domain types, error handling,
//! the prediction wire contract, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Section`] - Closed set of top-level UI sections (Home, Classifier, About)
//! - [`ExampleKind`] - Canned example texts (Spam, Ham)
//! - [`NotificationKind`] - Toast severity (Success, Error, Info)
//!
//! ### Prediction Contract (`prediction`)
//! - [`PredictRequest`] - JSON request body for `POST /predict`
//! - [`Prediction`] - JSON response shape from the classifier service
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use spamscope_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prediction;
pub mod types;

/// Prelude for common imports used throughout all Spamscope crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use prediction::{PredictRequest, Prediction, ERROR_SENTINEL};
pub use types::{ExampleKind, NotificationKind, Section};
