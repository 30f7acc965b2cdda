//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (welcome pulse, slide transition): draws every ~80ms for
//!   smooth animation.
//! - **Idle** (a slide sitting still): sleeps up to 500ms, only redraws on
//!   events or terminal resize. Animation math is also skipped.
//!
//! The cursor stays hidden for the whole session — a presenter screen has
//! nothing to type into.

mod component;
mod components;
mod event;
pub mod highlight;
pub mod markdown;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Direction};
use crate::deck::Deck;
use crate::tui::component::EventHandler;
use crate::tui::components::{SlideViewState, TopicPickerEvent, TopicPickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How many frames a slide-in transition lasts. At the animating poll rate
/// (~80ms) this is roughly a quarter second of travel.
pub const TRANSITION_FRAMES: u8 = 4;

/// An in-flight slide transition. Cosmetic only — the navigation position is
/// already final when one of these is created.
pub struct Transition {
    pub direction: Direction,
    pub frames_left: u8,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub slide_view: SlideViewState,
    // Topic picker overlay (None = hidden)
    pub topic_picker: Option<TopicPickerState>,
    // Animation state
    pub pulse_value: f32,
    pub transition: Option<Transition>,
    // Syntect theme for code slides, from resolved config
    pub code_theme: String,
}

impl TuiState {
    pub fn new(code_theme: String) -> Self {
        Self {
            slide_view: SlideViewState::new(),
            topic_picker: None,
            pulse_value: 0.0,
            transition: None,
            code_theme,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture, // Wheel scroll on code slides, click navigation
            Hide                // No text input anywhere, so no cursor
        )?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Run a navigation action and sync the TUI to the outcome: when the
/// position actually moved, the old scroll state is dropped and a slide-in
/// transition starts in the direction the core recorded.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    debug!("Applying {:?}", action);
    let before = (app.topic_index, app.slide_index);
    let effect = update(app, action);
    if (app.topic_index, app.slide_index) != before {
        tui.slide_view.reset();
        tui.transition = Some(Transition {
            direction: app.direction,
            frames_left: TRANSITION_FRAMES,
        });
    }
    effect
}

pub fn run(deck: &'static Deck, config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(deck, &config);
    let mut tui = TuiState::new(config.code_theme.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Determine if animations are running (welcome pulse or transition)
        let animating = app.show_welcome || tui.transition.is_some();

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;

            // Transitions burn down one frame per draw
            if let Some(t) = tui.transition.as_mut() {
                t.frames_left -= 1;
                if t.frames_left == 0 {
                    tui.transition = None;
                }
            }
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if apply(&mut app, &mut tui, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Welcome screen: navigation is inert until dismissed. Enter,
            // the forward keys, or a click starts the session.
            if app.show_welcome {
                match event {
                    TuiEvent::Submit | TuiEvent::NextSlide | TuiEvent::MouseClick(..) => {
                        apply(&mut app, &mut tui, Action::Begin);
                    }
                    TuiEvent::Quit => {
                        if apply(&mut app, &mut tui, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    _ => {}
                }
                continue;
            }

            // When the topic picker is open, route all events to it
            if let Some(ref mut picker) = tui.topic_picker {
                if let Some(picker_event) = picker.handle_event(&event) {
                    match picker_event {
                        TopicPickerEvent::Select(index) => {
                            apply(&mut app, &mut tui, Action::JumpToTopic(index));
                            tui.topic_picker = None;
                        }
                        TopicPickerEvent::Dismiss => {
                            tui.topic_picker = None;
                        }
                    }
                }
                continue;
            }

            // Wheel scroll — goes to the slide body (tall code listings)
            if matches!(event, TuiEvent::ScrollUp | TuiEvent::ScrollDown) {
                tui.slide_view.handle_event(&event);
                continue;
            }

            // Click navigation: left half of the screen retreats, right half
            // advances, like a slide clicker.
            if let TuiEvent::MouseClick(col, _row) = event {
                let width = terminal.get_frame().area().width;
                let action = if col < width / 2 {
                    Action::Retreat
                } else {
                    Action::Advance
                };
                apply(&mut app, &mut tui, action);
                continue;
            }

            match event {
                TuiEvent::NextSlide => {
                    apply(&mut app, &mut tui, Action::Advance);
                }
                TuiEvent::PrevSlide => {
                    apply(&mut app, &mut tui, Action::Retreat);
                }
                TuiEvent::FirstSlide => {
                    apply(&mut app, &mut tui, Action::JumpToStart);
                }
                TuiEvent::LastSlide => {
                    apply(&mut app, &mut tui, Action::JumpToEnd);
                }
                TuiEvent::TopicDigit(index) => {
                    // The picker swallows out-of-range digits when open; do
                    // the same here so the core only ever sees deck indices.
                    if index < app.deck.topic_count() {
                        apply(&mut app, &mut tui, Action::JumpToTopic(index));
                    }
                }
                // Esc doubles as the picker shortcut, mirroring the footer
                // hint's `t`.
                TuiEvent::OpenTopicPicker | TuiEvent::Escape => {
                    tui.topic_picker =
                        Some(TopicPickerState::new(app.deck.topics(), app.topic_index));
                }
                TuiEvent::Quit => {
                    if apply(&mut app, &mut tui, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    info!(
        "Session ended at topic {} slide {}",
        app.topic_index, app.slide_index
    );
    ratatui::restore();
    Ok(())
}
