//! Integration test: drive the whole built-in deck through `update()` and
//! check the navigation invariants hold over the real curriculum, not just
//! the unit-test fixture.

use lectern::core::action::{Action, Effect, update};
use lectern::core::state::App;
use lectern::deck::{Slide, curriculum};

fn position(app: &App) -> (usize, usize) {
    (app.topic_index, app.slide_index)
}

#[test]
fn walk_the_entire_deck_forward_and_back() {
    let deck = curriculum();
    let mut app = App::new(deck);
    update(&mut app, Action::Begin);
    assert!(!app.show_welcome);

    // Forward: every step stays in bounds, the global index counts 0..total,
    // and every addressed slide actually exists.
    let total = app.total_slides();
    for expected in 0..total {
        assert_eq!(app.global_slide_index(), expected);
        assert!(app.topic_index < deck.topic_count());
        assert!(app.slide_index < deck.slide_count(app.topic_index));
        let _ = app.current_slide();
        update(&mut app, Action::Advance);
    }

    // The walk ended on the last slide and further advances stay there.
    assert!(app.at_last_slide());
    assert_eq!(app.global_slide_index(), total - 1);
    let end = position(&app);
    update(&mut app, Action::Advance);
    assert_eq!(position(&app), end);

    // Backward: the global index counts straight back down to zero.
    for expected in (0..total).rev() {
        assert_eq!(app.global_slide_index(), expected);
        update(&mut app, Action::Retreat);
    }
    assert!(app.at_first_slide());
    update(&mut app, Action::Retreat);
    assert_eq!(position(&app), (0, 0));
}

#[test]
fn first_topic_rollover_matches_the_authored_curriculum() {
    // The deck opens with a 15-slide linked-lists hour; 15 advances from the
    // start land on the second topic, and one retreat returns to slide 14.
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
fn jump_to_every_topic_lands_on_its_first_slide() {
    let deck = curriculum();
    let mut app = App::new(deck);

    // From a scrambled position, each jump yields (k, 0) and the topic's
    // opener is a title slide.
    for k in (0..deck.topic_count()).rev() {
        update(&mut app, Action::Advance);
        update(&mut app, Action::JumpToTopic(k));
        assert_eq!(position(&app), (k, 0));
        assert!(matches!(app.current_slide(), Slide::Title { .. }));
    }
}

#[test]
fn jump_to_end_is_terminal_from_anywhere() {
    let deck = curriculum();
    for start_topic in 0..deck.topic_count() {
        let mut app = App::new(deck);
        update(&mut app, Action::JumpToTopic(start_topic));
        update(&mut app, Action::Advance);

        update(&mut app, Action::JumpToEnd);
        let last_topic = deck.topic_count() - 1;
        assert_eq!(app.topic_index, last_topic);
        assert_eq!(app.slide_index, deck.slide_count(last_topic) - 1);
        assert_eq!(app.global_slide_index(), app.total_slides() - 1);

        let end = position(&app);
        update(&mut app, Action::Advance);
        assert_eq!(position(&app), end);
    }
}

#[test]
fn jump_to_start_resets_from_the_far_end() {
    let mut app = App::new(curriculum());
    update(&mut app, Action::JumpToEnd);
    update(&mut app, Action::JumpToStart);
    assert_eq!(position(&app), (0, 0));
    assert_eq!(app.global_slide_index(), 0);
}

#[test]
fn quit_is_the_only_action_with_an_effect() {
    let mut app = App::new(curriculum());
    assert_eq!(update(&mut app, Action::Begin), Effect::None);
    assert_eq!(update(&mut app, Action::Advance), Effect::None);
    assert_eq!(update(&mut app, Action::JumpToEnd), Effect::None);
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
