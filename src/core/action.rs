//! # Actions
//!
//! Everything that can happen in Lectern becomes an `Action`.
//! User presses the right arrow? That's `Action::Advance`.
//! User picks a topic from the overlay? That's `Action::JumpToTopic(i)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place. No side effects here. I/O happens
//! elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! Every navigation action is total: at the two boundaries (first slide
//! overall, last slide overall) the moves are plain no-ops, never errors.
//! This makes everything testable: drive the whole deck through `update()`
//! and assert positions.

use crate::core::state::{App, Direction};

/// A navigation command, as produced by the TUI from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Next slide, rolling into the next topic at a topic's end.
    Advance,
    /// Previous slide, rolling onto the previous topic's last slide.
    Retreat,
    /// Switch to the given topic, starting at its first slide.
    /// The index must come from iterating the same deck.
    JumpToTopic(usize),
    /// First slide of the first topic.
    JumpToStart,
    /// Last slide of the last topic.
    JumpToEnd,
    /// Dismiss the welcome screen.
    Begin,
    /// Request shutdown.
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Advance => {
            advance(app);
            Effect::None
        }
        Action::Retreat => {
            retreat(app);
            Effect::None
        }
        Action::JumpToTopic(index) => {
            jump_to_topic(app, index);
            Effect::None
        }
        Action::JumpToStart => {
            app.direction = Direction::Forward;
            app.topic_index = 0;
            app.slide_index = 0;
            Effect::None
        }
        Action::JumpToEnd => {
            app.direction = Direction::Forward;
            app.topic_index = app.deck.topic_count() - 1;
            app.slide_index = app.deck.slide_count(app.topic_index) - 1;
            Effect::None
        }
        Action::Begin => {
            app.show_welcome = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn advance(app: &mut App) {
    if app.slide_index + 1 < app.deck.slide_count(app.topic_index) {
        app.direction = Direction::Forward;
        app.slide_index += 1;
    } else if app.topic_index + 1 < app.deck.topic_count() {
        app.direction = Direction::Forward;
        app.topic_index += 1;
        app.slide_index = 0;
    }
    // Last slide of the last topic: stay put.
}

fn retreat(app: &mut App) {
    if app.slide_index > 0 {
        app.direction = Direction::Backward;
        app.slide_index -= 1;
    } else if app.topic_index > 0 {
        app.direction = Direction::Backward;
        app.topic_index -= 1;
        app.slide_index = app.deck.slide_count(app.topic_index) - 1;
    }
    // First slide of the first topic: stay put.
}

fn jump_to_topic(app: &mut App, index: usize) {
    // Callers derive indices from the same deck, so an out-of-range index
    // is a bug on their side, not a condition to recover from.
    debug_assert!(index < app.deck.topic_count(), "topic index out of range");
    if index >= app.deck.topic_count() || index == app.topic_index {
        return;
    }
    app.direction = if index > app.topic_index {
        Direction::Forward
    } else {
        Direction::Backward
    };
    app.topic_index = index;
    app.slide_index = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::curriculum;
    use crate::test_support::test_app;

    fn position(app: &App) -> (usize, usize) {
        (app.topic_index, app.slide_index)
    }

    #[test]
    fn test_advance_moves_within_topic() {
        let mut app = test_app();
        update(&mut app, Action::Advance);
        assert_eq!(position(&app), (0, 1));
        assert_eq!(app.direction, Direction::Forward);
    }

    #[test]
    fn test_advance_rolls_into_next_topic() {
        let mut app = test_app();
        let last = app.deck.slide_count(0) - 1;
        app.slide_index = last;
        update(&mut app, Action::Advance);
        assert_eq!(position(&app), (1, 0));
    }

    #[test]
    fn test_retreat_rolls_onto_previous_topics_last_slide() {
        let mut app = test_app();
        app.topic_index = 1;
        app.slide_index = 0;
        update(&mut app, Action::Retreat);
        assert_eq!(position(&app), (0, app.deck.slide_count(0) - 1));
        assert_eq!(app.direction, Direction::Backward);
    }

    #[test]
    fn test_advance_is_idempotent_at_the_very_end() {
        let mut app = test_app();
        update(&mut app, Action::JumpToEnd);
        let end = position(&app);
        for _ in 0..3 {
            update(&mut app, Action::Advance);
            assert_eq!(position(&app), end);
        }
    }

    #[test]
    fn test_retreat_is_idempotent_at_the_very_start() {
        let mut app = test_app();
        for _ in 0..3 {
            update(&mut app, Action::Retreat);
            assert_eq!(position(&app), (0, 0));
        }
    }

    #[test]
    fn test_advance_then_retreat_returns_to_origin() {
        let mut app = test_app();
        // Walk a few steps in, then check the inverse at each position.
        for _ in 0..app.total_slides() - 1 {
            let before = position(&app);
            update(&mut app, Action::Advance);
            let after = position(&app);
            update(&mut app, Action::Retreat);
            assert_eq!(position(&app), before);
            update(&mut app, Action::Advance);
            assert_eq!(position(&app), after);
        }
    }

    #[test]
    fn test_position_stays_in_bounds_over_a_full_walk() {
        let mut app = test_app();
        for _ in 0..app.total_slides() + 5 {
            update(&mut app, Action::Advance);
            assert!(app.topic_index < app.deck.topic_count());
            assert!(app.slide_index < app.deck.slide_count(app.topic_index));
        }
        for _ in 0..app.total_slides() + 5 {
            update(&mut app, Action::Retreat);
            assert!(app.topic_index < app.deck.topic_count());
            assert!(app.slide_index < app.deck.slide_count(app.topic_index));
        }
    }

    #[test]
    fn test_global_index_is_strictly_monotonic() {
        let mut app = test_app();
        let mut previous = app.global_slide_index();
        while !app.at_last_slide() {
            update(&mut app, Action::Advance);
            let current = app.global_slide_index();
            assert!(current > previous);
            previous = current;
        }
        assert_eq!(app.global_slide_index(), app.total_slides() - 1);

        while !app.at_first_slide() {
            update(&mut app, Action::Retreat);
            let current = app.global_slide_index();
            assert!(current < previous);
            previous = current;
        }
        assert_eq!(app.global_slide_index(), 0);
    }

    #[test]
    fn test_global_index_hits_total_only_at_the_end() {
        let mut app = test_app();
        while !app.at_last_slide() {
            assert_ne!(app.global_slide_index(), app.total_slides() - 1);
            update(&mut app, Action::Advance);
        }
        assert_eq!(app.global_slide_index(), app.total_slides() - 1);
    }

    #[test]
    fn test_jump_to_topic_resets_slide_and_sets_direction() {
        let mut app = test_app();
        app.slide_index = 1;
        update(&mut app, Action::JumpToTopic(2));
        assert_eq!(position(&app), (2, 0));
        assert_eq!(app.direction, Direction::Forward);

        update(&mut app, Action::JumpToTopic(0));
        assert_eq!(position(&app), (0, 0));
        assert_eq!(app.direction, Direction::Backward);
    }

    #[test]
    fn test_jump_to_topic_same_topic_keeps_slide() {
        let mut app = test_app();
        app.slide_index = 1;
        app.direction = Direction::Backward;
        update(&mut app, Action::JumpToTopic(0));
        assert_eq!(position(&app), (0, 1));
        assert_eq!(app.direction, Direction::Backward);
    }

    #[test]
    fn test_jump_to_start_and_end() {
        let mut app = test_app();
        update(&mut app, Action::JumpToEnd);
        assert!(app.at_last_slide());

        update(&mut app, Action::JumpToStart);
        assert_eq!(position(&app), (0, 0));
    }

    #[test]
    fn test_begin_dismisses_welcome() {
        let mut app = test_app();
        assert!(app.show_welcome);
        assert_eq!(update(&mut app, Action::Begin), Effect::None);
        assert!(!app.show_welcome);
    }

    #[test]
    fn test_quit_requests_shutdown() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    // The built-in deck opens with a 15-slide topic; walking through it
    // lands on the second topic, and one step back returns to slide 14.
    #[test]
    fn test_full_deck_topic_rollover() {
        let mut app = App::new(curriculum());
        assert_eq!(app.deck.slide_count(0), 15);

        for _ in 0..15 {
            update(&mut app, Action::Advance);
        }
        assert_eq!(position(&app), (1, 0));

        update(&mut app, Action::Retreat);
        assert_eq!(position(&app), (0, 14));
    }

    #[test]
    fn test_full_deck_jump_to_end_is_terminal() {
        let mut app = App::new(curriculum());
        update(&mut app, Action::JumpToTopic(3));
        update(&mut app, Action::Advance);

        update(&mut app, Action::JumpToEnd);
        let last_topic = app.deck.topic_count() - 1;
        assert_eq!(app.topic_index, last_topic);
        assert_eq!(app.slide_index, app.deck.slide_count(last_topic) - 1);

        let end = position(&app);
        update(&mut app, Action::Advance);
        assert_eq!(position(&app), end);
    }
}
