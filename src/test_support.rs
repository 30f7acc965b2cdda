//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::deck::{Deck, Slide, Topic};

/// A small fixture deck: three topics with uneven slide counts, so
/// boundary arithmetic gets exercised without walking the full curriculum.
static TEST_DECK: Deck = Deck {
    title: "Test Deck",
    subtitle: "Fixture for unit tests",
    tagline: "Three topics, six slides",
    topics: &[
        Topic {
            id: 1,
            name: "Alpha",
            duration: "10 min",
            slides: &[
                Slide::Title {
                    title: "Alpha",
                    subtitle: "First topic",
                    description: "Opening slides",
                },
                Slide::Content {
                    title: "Alpha points",
                    points: &["**First** point", "Second point"],
                    diagram: true,
                },
                Slide::Code {
                    title: "Alpha code",
                    description: Some("A listing"),
                    code: "const x = 1;\nconsole.log(x);",
                },
            ],
        },
        Topic {
            id: 2,
            name: "Beta",
            duration: "5 min",
            slides: &[
                Slide::Title {
                    title: "Beta",
                    subtitle: "Second topic",
                    description: "Middle slides",
                },
                Slide::Content {
                    title: "Beta points",
                    points: &["Only point"],
                    diagram: false,
                },
            ],
        },
        Topic {
            id: 3,
            name: "Gamma",
            duration: "1 min",
            slides: &[Slide::Code {
                title: "Gamma code",
                description: None,
                code: "done();",
            }],
        },
    ],
};

pub fn test_deck() -> &'static Deck {
    &TEST_DECK
}

/// Creates a test App positioned at the start of the fixture deck.
pub fn test_app() -> App {
    App::new(test_deck())
}
