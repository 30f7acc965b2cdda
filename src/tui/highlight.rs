//! Syntect highlighting for code slides.
//!
//! The curriculum's listings are JavaScript teaching examples shown verbatim;
//! highlighting is purely cosmetic. Syntax and theme sets are loaded once and
//! shared across all slides.

use std::sync::LazyLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use unicode_width::UnicodeWidthStr;

use crate::core::config::DEFAULT_CODE_THEME;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Highlight a code listing into styled lines, one `Line` per source line.
///
/// Unknown theme names fall back to the default theme rather than failing —
/// the theme comes from user config and a typo shouldn't take the slide down.
pub fn highlight_code(code: &str, theme_name: &str) -> Vec<Line<'static>> {
    let theme = THEME_SET
        .themes
        .get(theme_name)
        .unwrap_or_else(|| &THEME_SET.themes[DEFAULT_CODE_THEME]);

    let Some(syntax) = SYNTAX_SET.find_syntax_by_token("js") else {
        return plain_lines(code);
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();
    for line in LinesWithEndings::from(code) {
        let Ok(ranges) = highlighter.highlight_line(line, &SYNTAX_SET) else {
            lines.push(Line::from(Span::raw(
                line.trim_end_matches('\n').replace('\t', "    "),
            )));
            continue;
        };
        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .filter_map(|(hl_style, frag)| {
                // Expand tabs → 4 spaces (ratatui renders \t as zero-width)
                let content = frag.trim_end_matches('\n').replace('\t', "    ");
                if content.is_empty() {
                    return None;
                }
                let fg = Color::Rgb(
                    hl_style.foreground.r,
                    hl_style.foreground.g,
                    hl_style.foreground.b,
                );
                Some(Span::styled(content, Style::default().fg(fg)))
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

fn plain_lines(code: &str) -> Vec<Line<'static>> {
    code.lines()
        .map(|line| {
            Line::from(Span::styled(
                line.replace('\t', "    "),
                Style::default().fg(Color::White),
            ))
        })
        .collect()
}

/// Widest display column of the raw listing, for sizing the scroll canvas.
pub fn max_line_width(code: &str) -> u16 {
    code.lines()
        .map(|line| line.replace('\t', "    ").width())
        .max()
        .unwrap_or(0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_output_line_per_source_line() {
        let lines = highlight_code("const a = 1;\nconst b = 2;\n", DEFAULT_CODE_THEME);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn keywords_get_a_foreground_color() {
        let lines = highlight_code("const answer = 42;", DEFAULT_CODE_THEME);
        let has_colored_span = lines[0]
            .spans
            .iter()
            .any(|s| matches!(s.style.fg, Some(Color::Rgb(..))));
        assert!(has_colored_span, "expected syntect colors, got {:?}", lines);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let lines = highlight_code("let x = 0;", "no-such-theme");
        assert!(!lines.is_empty());
    }

    #[test]
    fn tabs_expanded_to_spaces() {
        let lines = highlight_code("function f() {\n\treturn 1;\n}", DEFAULT_CODE_THEME);
        let has_tabs = lines
            .iter()
            .any(|l| l.spans.iter().any(|s| s.content.contains('\t')));
        assert!(!has_tabs, "no raw tabs should remain");
    }

    #[test]
    fn max_line_width_measures_widest_line() {
        assert_eq!(max_line_width("ab\nabcd\nabc"), 4);
        assert_eq!(max_line_width(""), 0);
        // A tab counts as its four-space expansion.
        assert_eq!(max_line_width("\tx"), 5);
    }
}
