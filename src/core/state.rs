//! # Application State
//!
//! Core navigation state for Lectern. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: &'static Deck      // the slides (never mutated)
//! ├── topic_index: usize       // which topic is showing
//! ├── slide_index: usize       // which slide within that topic
//! ├── direction: Direction     // last travel sense (transition pick)
//! └── show_welcome: bool       // welcome screen still up
//! ```
//!
//! Invariant: `(topic_index, slide_index)` always addresses an existing
//! slide. State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.
//!
//! The derived values (`global_slide_index`, `total_slides`) are recomputed
//! from the deck on every read. The deck never changes at runtime and the
//! sums are O(topic count), so caching would buy nothing.

use crate::core::config::ResolvedConfig;
use crate::deck::{Deck, Slide, Topic};

/// Which way the presenter last moved. Only ever consulted to pick the
/// visual transition; position correctness never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

pub struct App {
    pub deck: &'static Deck,
    pub topic_index: usize,
    pub slide_index: usize,
    pub direction: Direction,
    pub show_welcome: bool,
}

impl App {
    pub fn new(deck: &'static Deck) -> Self {
        Self {
            deck,
            topic_index: 0,
            slide_index: 0,
            direction: Direction::Forward,
            show_welcome: true,
        }
    }

    pub fn from_config(deck: &'static Deck, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(deck);
        if let Some(topic) = config.start_topic {
            app.topic_index = topic;
        }
        app.show_welcome = config.show_welcome;
        app
    }

    pub fn current_topic(&self) -> &'static Topic {
        self.deck.topic(self.topic_index)
    }

    pub fn current_slide(&self) -> &'static Slide {
        self.deck.slide(self.topic_index, self.slide_index)
    }

    /// Position of the current slide in the flattened deck, for the
    /// progress indicator.
    pub fn global_slide_index(&self) -> usize {
        self.deck.flat_index(self.topic_index, self.slide_index)
    }

    pub fn total_slides(&self) -> usize {
        self.deck.total_slides()
    }

    pub fn at_first_slide(&self) -> bool {
        self.topic_index == 0 && self.slide_index == 0
    }

    pub fn at_last_slide(&self) -> bool {
        self.topic_index == self.deck.topic_count() - 1
            && self.slide_index == self.deck.slide_count(self.topic_index) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.topic_index, 0);
        assert_eq!(app.slide_index, 0);
        assert_eq!(app.direction, Direction::Forward);
        assert!(app.show_welcome);
    }

    #[test]
    fn test_from_config_applies_start_topic_and_welcome() {
        let config = ResolvedConfig {
            start_topic: Some(2),
            show_welcome: false,
            code_theme: "base16-ocean.dark".to_string(),
        };
        let app = App::from_config(crate::test_support::test_deck(), &config);
        assert_eq!(app.topic_index, 2);
        assert_eq!(app.slide_index, 0);
        assert!(!app.show_welcome);
    }

    #[test]
    fn test_boundary_queries() {
        let mut app = test_app();
        assert!(app.at_first_slide());
        assert!(!app.at_last_slide());

        app.topic_index = app.deck.topic_count() - 1;
        app.slide_index = app.deck.slide_count(app.topic_index) - 1;
        assert!(app.at_last_slide());
        assert!(!app.at_first_slide());
    }

    #[test]
    fn test_global_index_counts_preceding_topics() {
        let mut app = test_app();
        app.topic_index = 1;
        app.slide_index = 1;
        assert_eq!(app.global_slide_index(), app.deck.slide_count(0) + 1);
    }
}
