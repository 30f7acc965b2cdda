//! # Footer Component
//!
//! Bottom chrome: a filled progress bar over the flattened deck plus the
//! slide counter and key hints. Stateless—both numbers come straight from
//! the navigation core's derived reads each frame.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const KEY_HINTS: &str = "←/→ Navigate   t Topics   Home/End Jump   q Quit";

/// Bottom bar: progress over the whole deck and key hints. Height 2.
pub struct Footer {
    /// Zero-based position in the flattened deck.
    pub global_index: usize,
    pub total_slides: usize,
}

impl Footer {
    pub fn new(global_index: usize, total_slides: usize) -> Self {
        Self {
            global_index,
            total_slides,
        }
    }

    /// How many columns of the bar are filled at the given width.
    fn filled_columns(&self, width: u16) -> u16 {
        if self.total_slides == 0 {
            return 0;
        }
        ((self.global_index + 1) * width as usize / self.total_slides) as u16
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [bar_area, hints_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        // Counter sits at the right end of the bar line.
        let counter = format!(" {}/{}", self.global_index + 1, self.total_slides);
        let bar_width = bar_area.width.saturating_sub(counter.len() as u16);
        let filled = self.filled_columns(bar_width).min(bar_width);

        let bar_line = Line::from(vec![
            Span::styled("█".repeat(filled as usize), Style::default().fg(Color::Cyan)),
            Span::styled(
                "─".repeat((bar_width - filled) as usize),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(counter, Style::default().add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(bar_line, bar_area);

        frame.render_widget(
            Line::from(Span::styled(
                KEY_HINTS,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )),
            hints_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(footer: &mut Footer) -> String {
        let backend = TestBackend::new(80, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                footer.render(f, f.area());
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
    fn test_footer_shows_counter_and_hints() {
        let mut footer = Footer::new(4, 114);
        let text = rendered_text(&mut footer);
        assert!(text.contains("5/114"));
        assert!(text.contains("Navigate"));
        assert!(text.contains("q Quit"));
    }

    #[test]
    fn test_bar_empty_at_start_full_at_end() {
        let first = Footer::new(0, 100).filled_columns(74);
        let last = Footer::new(99, 100).filled_columns(74);
        assert!(first < 2);
        assert_eq!(last, 74);
    }

    #[test]
    fn test_bar_grows_monotonically() {
        let width = 74;
        let mut previous = 0;
        for i in 0..50 {
            let filled = Footer::new(i, 50).filled_columns(width);
            assert!(filled >= previous, "bar shrank at slide {i}");
            previous = filled;
        }
    }

    #[test]
    fn test_empty_deck_does_not_divide_by_zero() {
        assert_eq!(Footer::new(0, 0).filled_columns(74), 0);
    }
}
