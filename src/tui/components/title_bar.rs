//! # TitleBar Component
//!
//! Top status bar showing where the presenter is in the deck.
//!
//! ## Responsibilities
//!
//! - Display the deck title
//! - Display the current topic's name and duration label
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational—it receives all data as props and has no
//! internal state. This makes it trivial to test and reason about:
//!
//! ```rust,ignore
//! let title_bar = TitleBar::new(deck.title, topic.name, topic.duration);
//! title_bar.render(frame, area);
//! ```
//!
//! The props come from two places (`deck_title` from the static deck,
//! `topic_name`/`duration` from the topic the navigation core currently
//! addresses), but the TitleBar doesn't care where they come from—it just
//! renders what it's given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component: deck title, current topic, duration label.
///
/// All fields are "props" borrowed from the static deck, so the component
/// itself is `Copy`-cheap to build every frame.
pub struct TitleBar {
    pub deck_title: &'static str,
    pub topic_name: &'static str,
    pub duration: &'static str,
}

impl TitleBar {
    pub fn new(deck_title: &'static str, topic_name: &'static str, duration: &'static str) -> Self {
        Self {
            deck_title,
            topic_name,
            duration,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    ///
    /// Always height 1; a plain `Line` rather than a `Block` since there is
    /// nothing to border or pad.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.deck_title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.topic_name, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" ({})", self.duration),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_deck_and_topic() {
        let mut title_bar = TitleBar::new(
            "Data Structures & Algorithms",
            "Linked Lists",
            "60 min",
        );
        let text = rendered_text(&mut title_bar);

        assert!(text.contains("Data Structures & Algorithms"));
        assert!(text.contains("Linked Lists"));
        assert!(text.contains("(60 min)"));
    }

    #[test]
    fn test_title_bar_separator_present() {
        let mut title_bar = TitleBar::new("Deck", "Topic", "5 min");
        let text = rendered_text(&mut title_bar);
        assert!(text.contains("Deck | Topic"));
    }
}
