//! Top-level frame layout: title bar, slide body, footer, overlay last.
//!
//! While the welcome screen is up it owns the whole frame; the presentation
//! chrome only appears once the session has started.

use crate::core::state::{App, Direction};
use crate::tui::component::Component;
use crate::tui::components::{Footer, SlideView, TitleBar, TopicPicker, Welcome};
use crate::tui::{TRANSITION_FRAMES, Transition, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    if app.show_welcome {
        let mut welcome = Welcome::new(app.deck, tui.pulse_value);
        welcome.render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(2)]);
    let [title_area, slide_area, footer_area] = layout.areas(frame.area());

    let topic = app.current_topic();
    let mut title_bar = TitleBar::new(app.deck.title, topic.name, topic.duration);
    title_bar.render(frame, title_area);

    // The slide body slides in horizontally for a few frames after each move.
    let slide_area = transition_rect(slide_area, tui.transition.as_ref());
    let mut slide_view = SlideView::new(&mut tui.slide_view, app.current_slide(), &tui.code_theme);
    slide_view.render(frame, slide_area);

    let mut footer = Footer::new(app.global_slide_index(), app.total_slides());
    footer.render(frame, footer_area);

    // Overlay renders last so it sits on top of everything.
    if let Some(picker_state) = tui.topic_picker.as_mut() {
        let mut picker = TopicPicker::new(picker_state, app.topic_index);
        picker.render(frame, frame.area());
    }
}

/// Offset the slide body by the transition's remaining travel. Forward moves
/// enter from the right edge, backward moves collapse toward the left, both
/// easing to the full rect as `frames_left` runs down.
fn transition_rect(area: Rect, transition: Option<&Transition>) -> Rect {
    let Some(t) = transition else {
        return area;
    };
    let shift = area.width / 5 * t.frames_left as u16 / TRANSITION_FRAMES as u16;
    match t.direction {
        Direction::Forward => Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        },
        Direction::Backward => Rect {
            width: area.width - shift,
            ..area
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::components::TopicPickerState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_welcome_screen_owns_the_frame() {
        let app = test_app();
        let mut tui = TuiState::new("base16-ocean.dark".to_string());
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Test Deck"));
        // No presentation chrome yet.
        assert!(!text.contains("Navigate"));
    }

    #[test]
    fn test_presentation_frame_has_chrome() {
        let mut app = test_app();
        app.show_welcome = false;
        let mut tui = TuiState::new("base16-ocean.dark".to_string());
        let text = draw_to_text(&app, &mut tui);
        // Title bar, slide, footer all present.
        assert!(text.contains("Test Deck | Alpha"));
        assert!(text.contains("1/6"));
        assert!(text.contains("Navigate"));
    }

    #[test]
    fn test_every_slide_kind_draws() {
        let mut app = test_app();
        app.show_welcome = false;
        let mut tui = TuiState::new("base16-ocean.dark".to_string());
        for topic_index in 0..app.deck.topic_count() {
            for slide_index in 0..app.deck.slide_count(topic_index) {
                app.topic_index = topic_index;
                app.slide_index = slide_index;
                tui.slide_view.reset();
                draw_to_text(&app, &mut tui);
            }
        }
    }

    #[test]
    fn test_topic_picker_overlay_draws_on_top() {
        let mut app = test_app();
        app.show_welcome = false;
        let mut tui = TuiState::new("base16-ocean.dark".to_string());
        tui.topic_picker = Some(TopicPickerState::new(app.deck.topics(), 0));
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Topics"));
        assert!(text.contains("Gamma"));
    }

    #[test]
    fn test_transition_rect_shifts_and_settles() {
        let area = Rect::new(0, 1, 80, 20);

        let early = Transition {
            direction: Direction::Forward,
            frames_left: TRANSITION_FRAMES,
        };
        let shifted = transition_rect(area, Some(&early));
        assert!(shifted.x > area.x);
        assert!(shifted.width < area.width);

        let backward = Transition {
            direction: Direction::Backward,
            frames_left: TRANSITION_FRAMES,
        };
        let pulled = transition_rect(area, Some(&backward));
        assert_eq!(pulled.x, area.x);
        assert!(pulled.width < area.width);

        assert_eq!(transition_rect(area, None), area);
    }
}
