//! Application state (the TEA model)

use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::form::FormState;
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::router::SectionRouter;

/// How long an activated control renders in its pressed style.
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(150);

/// Which classifier form control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Input,
    SpamExample,
    HamExample,
    Clear,
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Input,
        FormFocus::SpamExample,
        FormFocus::HamExample,
        FormFocus::Clear,
        FormFocus::Submit,
    ];

    pub fn next(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Complete application state.
///
/// Mutated only by `handler::update()`; the TUI reads it to render.
#[derive(Debug)]
pub struct AppState {
    /// Set when the user asked to exit; the event loop stops on the next pass.
    pub should_quit: bool,

    /// Active section and navigation history.
    pub router: SectionRouter,

    /// Classifier input buffer.
    pub input: InputState,

    /// Focused control within the classifier form.
    pub focus: FormFocus,

    /// Request phase and last result.
    pub form: FormState,

    /// Toast slot and timers.
    pub notifications: NotificationState,

    /// Control currently rendered in its pressed style, with press time.
    /// Cleared by the tick handler after [`PRESS_FEEDBACK`].
    pub pressed: Option<(FormFocus, Instant)>,

    /// Monotonic frame counter for spinner animation.
    pub animation_frame: usize,

    /// Loaded configuration.
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            should_quit: false,
            router: SectionRouter::new(settings.ui.default_section),
            input: InputState::default(),
            focus: FormFocus::default(),
            form: FormState::default(),
            notifications: NotificationState::new(&settings.notifications),
            pressed: None,
            animation_frame: 0,
            settings,
        }
    }

    /// Mark a control as just activated for visual feedback.
    pub fn press(&mut self, focus: FormFocus) {
        self.pressed = Some((focus, Instant::now()));
    }

    /// True while `focus` should render in its pressed style.
    pub fn is_pressed(&self, focus: FormFocus) -> bool {
        matches!(self.pressed, Some((f, _)) if f == focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spamscope_core::types::Section;

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new(Settings::default());
        assert!(!state.should_quit);
        assert_eq!(state.router.active(), Section::Home);
        assert!(state.input.is_empty());
        assert_eq!(state.focus, FormFocus::Input);
        assert!(!state.form.is_busy());
        assert!(state.notifications.current().is_none());
        assert!(state.pressed.is_none());
    }

    #[test]
    fn test_default_section_from_settings() {
        let mut settings = Settings::default();
        settings.ui.default_section = Section::Classifier;
        let state = AppState::new(settings);
        assert_eq!(state.router.active(), Section::Classifier);
    }

    #[test]
    fn test_focus_cycle_wraps() {
        assert_eq!(FormFocus::Submit.next(), FormFocus::Input);
        assert_eq!(FormFocus::Input.prev(), FormFocus::Submit);
        for focus in FormFocus::ORDER {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_press_tracking() {
        let mut state = AppState::new(Settings::default());
        state.press(FormFocus::Submit);
        assert!(state.is_pressed(FormFocus::Submit));
        assert!(!state.is_pressed(FormFocus::Clear));
    }
}
