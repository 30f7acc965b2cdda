//! # Welcome Component
//!
//! Session-start screen shown before the first slide: deck title, the course
//! summary wrapped to a readable column, and a pulsing start hint. Navigation
//! keys are inert until this screen is dismissed; the event loop owns that
//! rule, this component only draws.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::deck::Deck;
use crate::tui::component::Component;

pub struct Welcome<'a> {
    deck: &'a Deck,
    /// 0.0..=1.0, driven by the event loop's animation timer.
    pulse_value: f32,
}

impl<'a> Welcome<'a> {
    pub fn new(deck: &'a Deck, pulse_value: f32) -> Self {
        Self { deck, pulse_value }
    }
}

impl<'a> Component for Welcome<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Wrap the two description lines to a column that stays readable on
        // wide terminals.
        let column = (area.width.saturating_sub(4) as usize).min(64);
        let mut body_lines: Vec<Line> = Vec::new();
        for raw in [self.deck.subtitle, self.deck.tagline] {
            for wrapped in textwrap::wrap(raw, column) {
                body_lines.push(Line::from(Span::styled(
                    wrapped.into_owned(),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        let body_height = body_lines.len() as u16;
        let [title_area, _, body_area, _, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(body_height),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                self.deck.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            title_area,
        );

        frame.render_widget(
            Paragraph::new(body_lines).alignment(Alignment::Center),
            body_area,
        );

        // Pulse between dim and bright gray so the hint breathes.
        let level = (120.0 + self.pulse_value * 135.0) as u8;
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Press Enter to start →",
                Style::default().fg(Color::Rgb(level, level, level)),
            ))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_deck;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(width: u16, height: u16, pulse: f32) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut welcome = Welcome::new(test_deck(), pulse);
                welcome.render(f, f.area());
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
    fn test_welcome_shows_title_and_hint() {
        let text = rendered_text(80, 24, 0.5);
        assert!(text.contains("Test Deck"));
        assert!(text.contains("Fixture for unit tests"));
        assert!(text.contains("Press Enter to start"));
    }

    #[test]
    fn test_welcome_survives_tiny_terminal() {
        // Layout must not panic when there is no room to center anything.
        let text = rendered_text(20, 4, 0.0);
        assert!(!text.is_empty());
    }
}
