//! Centralized theme system for the Spamscope TUI.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Result icons and spinner frames

pub mod icons;
pub mod palette;
pub mod styles;
