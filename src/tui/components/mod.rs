//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top bar showing deck title, current topic and duration
//! - `Footer`: Progress bar, slide counter and key hints
//! - `Welcome`: Session-start screen with the pulsing start hint
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SlideView`: Current slide renderer with a scrollable code viewport
//! - `TopicPicker`: Overlay list of topics, emits jump/dismiss events
//!
//! The stateful ones split into a persistent state struct (lives in
//! `TuiState`, handles events) and a transient wrapper created each frame
//! with borrowed state, aligning with ratatui's `StatefulWidget` pattern.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component: state
//! types, event types, rendering logic, event handling, and tests. You can
//! read one file to understand how a component works.

// Re-export components
mod footer;
mod title_bar;
pub use footer::Footer;
pub use title_bar::TitleBar;

pub mod slide_view;
pub mod topic_picker;
pub mod welcome;
pub use slide_view::{SlideView, SlideViewState};
pub use topic_picker::{TopicPicker, TopicPickerEvent, TopicPickerState};
pub use welcome::Welcome;
