//! # Topic Picker Component
//!
//! Overlay for jumping between topics. Opened with `t` (or Esc), dismissed
//! with Esc. Digits 1–9 jump straight to a topic without opening the list.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TopicPickerState` lives in `TuiState` (None = hidden)
//! - `TopicPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::deck::Topic;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the topic picker overlay.
pub struct TopicPickerState {
    pub topics: &'static [Topic],
    pub selected: usize,
    pub list_state: ListState,
}

impl TopicPickerState {
    /// Opens with the cursor on the topic currently showing.
    pub fn new(topics: &'static [Topic], current_topic: usize) -> Self {
        let selected = current_topic.min(topics.len().saturating_sub(1));
        let mut list_state = ListState::default();
        if !topics.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            topics,
            selected,
            list_state,
        }
    }
}

impl EventHandler for TopicPickerState {
    type Event = TopicPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TopicPickerEvent> {
        match event {
            TuiEvent::Escape => Some(TopicPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.topics.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.topics.is_empty() {
                    self.selected = (self.selected + 1).min(self.topics.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => {
                if self.selected < self.topics.len() {
                    Some(TopicPickerEvent::Select(self.selected))
                } else {
                    None
                }
            }
            TuiEvent::TopicDigit(index) => {
                if *index < self.topics.len() {
                    Some(TopicPickerEvent::Select(*index))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Events emitted by the topic picker.
pub enum TopicPickerEvent {
    /// Jump to the topic at this index (validated against the deck).
    Select(usize),
    Dismiss,
}

/// Transient render wrapper for the topic picker overlay.
pub struct TopicPicker<'a> {
    state: &'a mut TopicPickerState,
    current_topic: usize,
}

impl<'a> TopicPicker<'a> {
    pub fn new(state: &'a mut TopicPickerState, current_topic: usize) -> Self {
        Self {
            state,
            current_topic,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " 1-9 Jump  Enter Select  Esc Back ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Topics ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        // Build list items: "1  Linked Lists              60 min *"
        let items: Vec<ListItem> = self
            .state
            .topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                let is_active = i == self.current_topic;
                let number = format!("{}", i + 1);
                let active_marker = if is_active { " *" } else { "" };

                // Calculate available space for the topic name
                let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding
                let fixed_width =
                    number.len() + 2 + topic.duration.len() + active_marker.len();
                let name_width = inner_width.saturating_sub(fixed_width);
                let name = truncate_str(topic.name, name_width);
                let padded_name = format!("{:<width$}", name, width = name_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let mut spans = vec![
                    Span::styled(
                        number,
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().fg(Color::Yellow)
                        },
                    ),
                    Span::styled("  ", style),
                    Span::styled(padded_name, style),
                    Span::styled(
                        topic.duration,
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().fg(Color::DarkGray)
                        },
                    ),
                ];

                if !active_marker.is_empty() {
                    spans.push(Span::styled(active_marker, style));
                }

                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.len() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        format!("{}...", &s[..max_width - 3])
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_deck;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_opens_on_current_topic() {
        let state = TopicPickerState::new(test_deck().topics(), 2);
        assert_eq!(state.selected, 2);
        assert_eq!(state.list_state.selected(), Some(2));
    }

    #[test]
    fn test_cursor_moves_are_clamped() {
        let mut state = TopicPickerState::new(test_deck().topics(), 0);
        assert!(state.handle_event(&TuiEvent::CursorUp).is_none());
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, test_deck().topic_count() - 1);
    }

    #[test]
    fn test_submit_selects_cursor_topic() {
        let mut state = TopicPickerState::new(test_deck().topics(), 0);
        state.handle_event(&TuiEvent::CursorDown);
        assert!(matches!(
            state.handle_event(&TuiEvent::Submit),
            Some(TopicPickerEvent::Select(1))
        ));
    }

    #[test]
    fn test_digit_jumps_directly() {
        let mut state = TopicPickerState::new(test_deck().topics(), 0);
        assert!(matches!(
            state.handle_event(&TuiEvent::TopicDigit(2)),
            Some(TopicPickerEvent::Select(2))
        ));
        // Out-of-range digits are swallowed, never forwarded to the core.
        assert!(state.handle_event(&TuiEvent::TopicDigit(8)).is_none());
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = TopicPickerState::new(test_deck().topics(), 0);
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(TopicPickerEvent::Dismiss)
        ));
    }

    #[test]
    fn test_render_lists_topics_with_durations() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TopicPickerState::new(test_deck().topics(), 1);
        terminal
            .draw(|f| {
                let mut picker = TopicPicker::new(&mut state, 1);
                picker.render(f, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Topics"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("10 min"));
        assert!(text.contains("Beta"));
    }
}
