//! Toast notification lifecycle
//!
//! At most one toast is visible at a time. A new toast replaces the current
//! one immediately, restarting the timers. Each toast lives through two
//! timed phases: fully visible, then a short slide-out before removal.
//! Phase transitions are driven by `tick()` from the TEA loop rather than
//! by wall-clock callbacks, so tests can back-date the timestamps.

use std::time::{Duration, Instant};

use spamscope_core::types::NotificationKind;

use crate::config::NotificationSettings;

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Fully visible
    Visible,
    /// Sliding out, still rendered
    Leaving,
}

/// A toast currently on screen.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    pub message: String,
    pub kind: NotificationKind,
    /// When the toast appeared. Public so tests can back-date it.
    pub shown_at: Instant,
    /// Set when the visible window elapses.
    pub leaving_since: Option<Instant>,
}

impl ActiveNotification {
    pub fn phase(&self) -> NotificationPhase {
        if self.leaving_since.is_some() {
            NotificationPhase::Leaving
        } else {
            NotificationPhase::Visible
        }
    }
}

/// Owns the single toast slot and its timing configuration.
#[derive(Debug, Clone)]
pub struct NotificationState {
    visible_for: Duration,
    exit_for: Duration,
    current: Option<ActiveNotification>,
}

impl NotificationState {
    pub fn new(settings: &NotificationSettings) -> Self {
        Self {
            visible_for: settings.visible(),
            exit_for: settings.exit(),
            current: None,
        }
    }

    /// The toast to render, if any.
    pub fn current(&self) -> Option<&ActiveNotification> {
        self.current.as_ref()
    }

    /// Mutable access for tests that back-date timestamps.
    pub fn current_mut(&mut self) -> Option<&mut ActiveNotification> {
        self.current.as_mut()
    }

    /// Show a toast. Any existing toast is dropped immediately, whatever
    /// phase it was in, and the timers restart from now.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.current = Some(ActiveNotification {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            leaving_since: None,
        });
    }

    /// Advance the lifecycle. Called on every tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(toast) = &mut self.current {
            match toast.leaving_since {
                None => {
                    if now.duration_since(toast.shown_at) >= self.visible_for {
                        toast.leaving_since = Some(now);
                    }
                }
                Some(since) => {
                    if now.duration_since(since) >= self.exit_for {
                        self.current = None;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NotificationState {
        NotificationState::new(&NotificationSettings::default())
    }

    #[test]
    fn test_starts_empty() {
        assert!(state().current().is_none());
    }

    #[test]
    fn test_notify_shows_toast() {
        let mut s = state();
        s.notify("Loaded spam example", NotificationKind::Info);
        let toast = s.current().unwrap();
        assert_eq!(toast.message, "Loaded spam example");
        assert_eq!(toast.kind, NotificationKind::Info);
        assert_eq!(toast.phase(), NotificationPhase::Visible);
    }

    #[test]
    fn test_toast_survives_tick_while_fresh() {
        let mut s = state();
        s.notify("hello", NotificationKind::Success);
        s.tick();
        assert_eq!(s.current().unwrap().phase(), NotificationPhase::Visible);
    }

    #[test]
    fn test_toast_enters_leaving_after_visible_window() {
        let mut s = state();
        s.notify("hello", NotificationKind::Success);
        s.current_mut().unwrap().shown_at = Instant::now() - Duration::from_millis(3100);
        s.tick();
        assert_eq!(s.current().unwrap().phase(), NotificationPhase::Leaving);
    }

    #[test]
    fn test_toast_removed_after_exit_window() {
        let mut s = state();
        s.notify("hello", NotificationKind::Error);
        s.current_mut().unwrap().shown_at = Instant::now() - Duration::from_millis(3100);
        s.tick();
        s.current_mut().unwrap().leaving_since =
            Some(Instant::now() - Duration::from_millis(400));
        s.tick();
        assert!(s.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_current_immediately() {
        let mut s = state();
        s.notify("first", NotificationKind::Success);
        s.notify("second", NotificationKind::Error);
        let toast = s.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.phase(), NotificationPhase::Visible);
    }

    #[test]
    fn test_new_toast_replaces_leaving_toast() {
        let mut s = state();
        s.notify("first", NotificationKind::Success);
        s.current_mut().unwrap().shown_at = Instant::now() - Duration::from_millis(3100);
        s.tick();
        assert_eq!(s.current().unwrap().phase(), NotificationPhase::Leaving);

        s.notify("second", NotificationKind::Info);
        let toast = s.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.phase(), NotificationPhase::Visible);
    }

    #[test]
    fn test_custom_timing() {
        let settings = NotificationSettings {
            visible_ms: 10,
            exit_ms: 5,
        };
        let mut s = NotificationState::new(&settings);
        s.notify("quick", NotificationKind::Info);
        s.current_mut().unwrap().shown_at = Instant::now() - Duration::from_millis(20);
        s.tick();
        assert_eq!(s.current().unwrap().phase(), NotificationPhase::Leaving);
    }
}
