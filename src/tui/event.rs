use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Navigation commands (become core Actions)
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    /// Digit key 1-9, already shifted to a 0-based topic index.
    TopicDigit(usize),

    // TUI-local events (handled directly in TUI)
    OpenTopicPicker,
    Escape,
    Submit,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    MouseClick(u16, u16),
    Resize,
    Quit,
    ForceQuit, // Ctrl+C
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char(' ')) => Some(TuiEvent::NextSlide),
                    (_, KeyCode::Char('n')) => Some(TuiEvent::NextSlide),
                    (_, KeyCode::Char('p')) => Some(TuiEvent::PrevSlide),
                    (_, KeyCode::Char('t')) => Some(TuiEvent::OpenTopicPicker),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char(c @ '1'..='9')) => {
                        Some(TuiEvent::TopicDigit(c as usize - '1' as usize))
                    }
                    (_, KeyCode::Right) => Some(TuiEvent::NextSlide),
                    (_, KeyCode::Left) => Some(TuiEvent::PrevSlide),
                    (_, KeyCode::PageDown) => Some(TuiEvent::NextSlide),
                    (_, KeyCode::PageUp) => Some(TuiEvent::PrevSlide),
                    (_, KeyCode::Home) => Some(TuiEvent::FirstSlide),
                    (_, KeyCode::End) => Some(TuiEvent::LastSlide),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(_) => {
                    Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
