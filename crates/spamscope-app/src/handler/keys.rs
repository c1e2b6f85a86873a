//! Key event translation
//!
//! Maps raw `InputKey` events to semantic messages based on the active
//! section and the focused form control. Returns `None` when a key has no
//! meaning in the current context.

use spamscope_core::types::{ExampleKind, Section};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormFocus};

/// Translate a key press into a follow-up message, if any.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::NextSection),
        InputKey::BackTab => return Some(Message::PrevSection),
        InputKey::CharCtrl('b') => return Some(Message::NavigateBack),
        InputKey::CharCtrl('f') => return Some(Message::NavigateForward),
        _ => {}
    }

    match state.router.active() {
        Section::Classifier => handle_classifier_key(state, key),
        Section::Home | Section::About => handle_static_section_key(key),
    }
}

/// Keys on the Home and About sections: quit and direct section jumps.
fn handle_static_section_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('1') => Some(Message::ShowSection(Section::Home)),
        InputKey::Char('2') => Some(Message::ShowSection(Section::Classifier)),
        InputKey::Char('3') => Some(Message::ShowSection(Section::About)),
        _ => None,
    }
}

/// Keys on the Classifier section: focus cycling, control activation, and
/// text editing when the input field is focused.
fn handle_classifier_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => return Some(Message::NavigateBack),
        InputKey::Up => {
            state.focus = state.focus.prev();
            return None;
        }
        InputKey::Down => {
            state.focus = state.focus.next();
            return None;
        }
        InputKey::Enter => return Some(activate_focused(state)),
        _ => {}
    }

    // Remaining keys edit the input buffer only while it is focused
    if state.focus != FormFocus::Input {
        return None;
    }
    match key {
        InputKey::Char(c) => state.input.insert_char(c),
        InputKey::Backspace => state.input.backspace(),
        InputKey::Delete => state.input.delete(),
        InputKey::Left => state.input.move_left(),
        InputKey::Right => state.input.move_right(),
        InputKey::Home => state.input.move_home(),
        InputKey::End => state.input.move_end(),
        _ => {}
    }
    None
}

/// Enter on a focused control.
fn activate_focused(state: &mut AppState) -> Message {
    state.press(state.focus);
    match state.focus {
        // Enter in the text field submits, like the original form
        FormFocus::Input | FormFocus::Submit => Message::Submit,
        FormFocus::SpamExample => Message::LoadExample(ExampleKind::Spam),
        FormFocus::HamExample => Message::LoadExample(ExampleKind::Ham),
        FormFocus::Clear => Message::ClearText,
    }
}
