//! # SlideView Component
//!
//! Renders whichever slide the navigation core currently addresses. One
//! render arm per slide kind:
//!
//! - `Title`: centered opener (heading, subheading, blurb)
//! - `Content`: heading plus an emphasis-aware bullet list
//! - `Code`: heading plus a highlighted listing in a scrollable viewport
//!
//! ## Architecture
//!
//! `SlideView` is a transient component (created each frame) that wraps
//! `&'a mut SlideViewState` (persistent scroll state) and the current slide
//! (props). Only code slides scroll; the state is reset every time the
//! navigation position changes so a new slide always starts at the top.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::deck::Slide;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::{highlight, markdown};

/// Scroll state for the slide body. Must be persisted in the parent TuiState;
/// only meaningful while a code slide is showing.
pub struct SlideViewState {
    pub scroll_state: ScrollViewState,
    /// Cached listing height, measured during the last render pass.
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames).
    pub viewport_height: u16,
}

impl Default for SlideViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Forget the previous slide's scroll position. Called whenever the
    /// navigation position changes.
    pub fn reset(&mut self) {
        self.scroll_state = ScrollViewState::default();
        self.content_height = 0;
    }

    /// Clamp scroll offset so it never exceeds the listing bounds.
    /// Prevents overscrolling past the last code line.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// EventHandler is implemented on `SlideViewState` rather than `SlideView`
/// because the wrapper is recreated each frame with fresh props, so it can't
/// hold the scroll position across events.
impl EventHandler for SlideViewState {
    type Event = (); // Scrolling is handled internally, nothing to emit

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the current slide.
pub struct SlideView<'a> {
    pub state: &'a mut SlideViewState,
    pub slide: &'static Slide,
    pub code_theme: &'a str,
}

impl<'a> SlideView<'a> {
    pub fn new(state: &'a mut SlideViewState, slide: &'static Slide, code_theme: &'a str) -> Self {
        Self {
            state,
            slide,
            code_theme,
        }
    }

    fn render_title(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        title: &'static str,
        subtitle: &'static str,
        description: &'static str,
    ) {
        // Centered opener, like a conference title card.
        let [title_area, subtitle_area, _, desc_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                subtitle,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            subtitle_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(description, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            desc_area,
        );
    }

    fn render_content(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        title: &'static str,
        points: &'static [&'static str],
        diagram: bool,
    ) {
        let body = inset(area, 2, 1);
        let [heading_area, _, points_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

        let mut heading_spans = vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )];
        if diagram {
            // Marks slides that were delivered with a whiteboard sketch.
            heading_spans.push(Span::styled(
                "  ◆ sketch",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ));
        }
        frame.render_widget(Line::from(heading_spans), heading_area);

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(points.len() * 2);
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let mut line = markdown::render_inline(point, Color::Gray);
            line.spans
                .insert(0, Span::styled("▸ ", Style::default().fg(Color::DarkGray)));
            lines.push(line);
        }
        frame.render_widget(
            Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
            points_area,
        );
    }

    fn render_code(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        title: &'static str,
        description: Option<&'static str>,
        code: &'static str,
    ) {
        let body = inset(area, 2, 1);
        let header_height = if description.is_some() { 2 } else { 1 };
        let [header_area, _, listing_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

        let mut header_lines = vec![Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))];
        if let Some(desc) = description {
            header_lines.push(Line::from(Span::styled(
                desc,
                Style::default().fg(Color::DarkGray),
            )));
        }
        frame.render_widget(Paragraph::new(Text::from(header_lines)), header_area);

        // Tall listings scroll vertically. The canvas is as wide as the
        // longest code line so nothing wraps; lines past the viewport edge
        // are clipped (the curriculum's lines are short).
        let lines = highlight::highlight_code(code, self.code_theme);
        let viewport_width = listing_area.width.saturating_sub(1); // scrollbar safe area
        let content_width = highlight::max_line_width(code).max(viewport_width);
        let content_height = lines.len() as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = listing_area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(Text::from(lines)),
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, listing_area, &mut self.state.scroll_state);
    }
}

impl<'a> Component for SlideView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // All slide fields are Copy (&'static str and friends), so the match
        // copies them out of the static deck.
        match *self.slide {
            Slide::Title {
                title,
                subtitle,
                description,
            } => self.render_title(frame, area, title, subtitle, description),
            Slide::Content {
                title,
                points,
                diagram,
            } => self.render_content(frame, area, title, points, diagram),
            Slide::Code {
                title,
                description,
                code,
            } => self.render_code(frame, area, title, description, code),
        }
    }
}

/// Shrink a rect by a horizontal and vertical margin, saturating on small
/// terminals.
fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x + horizontal.min(area.width / 2),
        y: area.y + vertical.min(area.height / 2),
        width: area.width.saturating_sub(horizontal * 2),
        height: area.height.saturating_sub(vertical * 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_CODE_THEME;
    use crate::test_support::test_deck;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_slide(slide: &'static Slide, state: &mut SlideViewState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut view = SlideView::new(state, slide, DEFAULT_CODE_THEME);
                view.render(f, f.area());
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
    fn test_title_slide_renders_all_three_texts() {
        let deck = test_deck();
        let mut state = SlideViewState::new();
        let text = render_slide(deck.slide(0, 0), &mut state);
        assert!(text.contains("Alpha"));
        assert!(text.contains("First topic"));
        assert!(text.contains("Opening slides"));
    }

    #[test]
    fn test_content_slide_renders_points_with_markers() {
        let deck = test_deck();
        let mut state = SlideViewState::new();
        let text = render_slide(deck.slide(0, 1), &mut state);
        assert!(text.contains("Alpha points"));
        assert!(text.contains("First point")); // ** markers consumed
        assert!(!text.contains("**"));
        assert!(text.contains("▸"));
    }

    #[test]
    fn test_diagram_flag_shows_marker() {
        let deck = test_deck();
        let mut state = SlideViewState::new();
        // Fixture slide (0, 1) carries the diagram flag, (1, 1) does not.
        let flagged = render_slide(deck.slide(0, 1), &mut state);
        assert!(flagged.contains("◆ sketch"));

        let plain = render_slide(deck.slide(1, 1), &mut state);
        assert!(!plain.contains("◆ sketch"));
    }

    #[test]
    fn test_code_slide_caches_listing_height() {
        let deck = test_deck();
        let mut state = SlideViewState::new();
        let text = render_slide(deck.slide(0, 2), &mut state);
        assert!(text.contains("Alpha code"));
        assert!(text.contains("A listing"));
        // Fixture listing is two lines.
        assert_eq!(state.content_height, 2);
    }

    #[test]
    fn test_scroll_down_is_clamped_to_content() {
        let mut state = SlideViewState::new();
        state.content_height = 10;
        state.viewport_height = 8;
        for _ in 0..20 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.scroll_state.offset().y, 2);
    }

    #[test]
    fn test_reset_clears_scroll() {
        let mut state = SlideViewState::new();
        state.content_height = 10;
        state.viewport_height = 5;
        state.handle_event(&TuiEvent::ScrollDown);
        assert!(state.scroll_state.offset().y > 0);

        state.reset();
        assert_eq!(state.scroll_state.offset().y, 0);
        assert_eq!(state.content_height, 0);
    }
}
