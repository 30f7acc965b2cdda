//! The built-in curriculum: six topics, one module each. The slide tables
//! are the bulk of the crate by line count — everything here is static
//! display data.

mod debugging;
mod dynamic_programming;
mod graphs;
mod linked_lists;
mod recursion;
mod trees;

use super::Deck;

pub(super) static DECK: Deck = Deck {
    title: "Data Structures & Algorithms in JavaScript",
    subtitle: "A comprehensive guide to mastering DSA in JavaScript",
    tagline: "Covering: Linked Lists, Recursion, Trees, Graphs, DP & More",
    topics: &[
        linked_lists::TOPIC,
        recursion::TOPIC,
        trees::TOPIC,
        graphs::TOPIC,
        dynamic_programming::TOPIC,
        debugging::TOPIC,
    ],
};
