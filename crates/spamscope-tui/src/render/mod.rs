//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use spamscope_app::state::AppState;
use spamscope_core::types::Section;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to state: widgets read from `AppState`, nothing here
/// mutates it. The toast overlay is drawn last so it sits above everything.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state.router.active()), areas.header);

    match state.router.active() {
        Section::Home => frame.render_widget(widgets::HomeSection, areas.body),
        Section::Classifier => {
            frame.render_widget(widgets::ClassifyForm::new(state), areas.body)
        }
        Section::About => frame.render_widget(widgets::AboutSection, areas.body),
    }

    // Toast overlay on top
    if let Some(notification) = state.notifications.current() {
        let toast = widgets::Toast::new(notification);
        let toast_rect = layout::toast_area(areas.body, toast.content_width());
        frame.render_widget(toast, toast_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use spamscope_app::form::ResultPanel;
    use spamscope_core::types::NotificationKind;

    #[test]
    fn test_view_renders_home_by_default() {
        let state = create_test_state();
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Spamscope"));
        assert!(term.buffer_contains("Email Spam Classifier"));
    }

    #[test]
    fn test_view_renders_active_section_exclusively() {
        let mut state = create_test_state();
        state.router.activate(Section::Classifier);

        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Analyze Email"));
        // Home body is not rendered
        assert!(!term.buffer_contains("open the classifier"));
    }

    #[test]
    fn test_view_renders_about() {
        let mut state = create_test_state();
        state.router.activate(Section::About);

        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("/predict"));
    }

    #[test]
    fn test_view_overlays_toast() {
        let mut state = create_test_state();
        state
            .notifications
            .notify("Text cleared", NotificationKind::Info);

        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Text cleared"));
    }

    #[test]
    fn test_view_shows_loading_over_result() {
        let mut state = create_test_state();
        state.router.activate(Section::Classifier);
        state.form.finish(ResultPanel::network_error("now".to_string()));
        state.form.start_loading();

        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state));

        assert!(term.buffer_contains("Analyzing email..."));
        assert!(!term.buffer_contains("NETWORK ERROR"));
    }
}
