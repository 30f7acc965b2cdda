//! Inline markdown → ratatui `Line` renderer.
//!
//! Content-slide points are single-line fragments that may carry inline
//! emphasis (`**bold**`, `*italic*`, `` `code` ``). This is a thin wrapper
//! around `pulldown_cmark` that converts just those inline events into styled
//! spans; block elements never occur in slide points, so there is no block
//! handling here.

use pulldown_cmark::{CowStr, Event, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render one point's inline markdown into a single styled line.
///
/// Returns owned spans (`'static`) so callers aren't constrained by input
/// lifetime.
pub fn render_inline(content: &str, base_fg: Color) -> Line<'static> {
    let mut w = InlineWriter::new(base_fg);
    for event in Parser::new(content) {
        w.handle(event);
    }
    Line::from(w.spans)
}

struct InlineWriter {
    spans: Vec<Span<'static>>,
    base_fg: Color,
    /// Inline style stack. Styles compose via `patch` so nested
    /// bold+italic works.
    styles: Vec<Style>,
}

impl InlineWriter {
    fn new(base_fg: Color) -> Self {
        Self {
            spans: vec![],
            base_fg,
            styles: vec![],
        }
    }

    /// Current effective style: top of stack, or base foreground color.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Strong) => {
                self.push_style(Style::default().add_modifier(Modifier::BOLD))
            }
            Event::Start(Tag::Emphasis) => {
                self.push_style(Style::default().add_modifier(Modifier::ITALIC))
            }
            Event::End(TagEnd::Strong | TagEnd::Emphasis) => {
                self.styles.pop();
            }
            Event::Text(t) => {
                let style = self.style();
                self.spans.push(Span::styled(t.to_string(), style));
            }
            Event::Code(c) => self.inline_code(c),
            Event::SoftBreak | Event::HardBreak => self.spans.push(Span::raw(" ")),
            _ => {} // Block tags, HTML, links — never occur in slide points
        }
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        let style = Style::default().fg(Color::White).bg(Color::DarkGray);
        self.spans.push(Span::styled(cow.to_string(), style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_text_is_bold() {
        let line = render_inline("Some **bold** text", Color::Blue);
        let bold_span = line.spans.iter().find(|s| s.content == "bold").unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn italic_text_is_italic() {
        let line = render_inline("An *emphasised* word", Color::Blue);
        let span = line
            .spans
            .iter()
            .find(|s| s.content == "emphasised")
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn nested_emphasis_composes() {
        let line = render_inline("***both***", Color::Blue);
        let span = line.spans.iter().find(|s| s.content == "both").unwrap();
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn inline_code_styled() {
        let line = render_inline("Use `head.next` here", Color::Blue);
        let code_span = line
            .spans
            .iter()
            .find(|s| s.content == "head.next")
            .unwrap();
        assert_eq!(code_span.style.fg, Some(Color::White));
        assert_eq!(code_span.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn plain_text_uses_base_color() {
        let line = render_inline("hello", Color::Green);
        assert_eq!(line.spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn big_o_notation_survives_untouched() {
        // Curriculum points lean on O(n) notation; the parser must not eat it.
        let line = render_inline("Access: O(n) - must traverse from head", Color::Blue);
        let flat: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(flat, "Access: O(n) - must traverse from head");
    }
}
