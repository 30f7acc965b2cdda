//! # Presentation Model
//!
//! The deck is pure data: an ordered list of topics, each an ordered list of
//! slides. It is compiled in, constructed once, and never mutated — the
//! navigation core reads its shape (slide counts per topic) to bound index
//! arithmetic, and the TUI reads slide content to render it.
//!
//! ```text
//! Deck
//! ├── title / subtitle / tagline     // welcome screen text
//! └── topics: &[Topic]
//!     ├── name, duration             // topic picker rows
//!     └── slides: &[Slide]           // Title | Content | Code
//! ```
//!
//! Indices handed to the accessors must be in bounds; the navigation core is
//! the only producer of indices and maintains that invariant.

mod curriculum;

/// A named group of slides covering one subject, with a duration label
/// shown in the topic picker.
#[derive(Debug)]
pub struct Topic {
    pub id: u32,
    pub name: &'static str,
    pub duration: &'static str,
    pub slides: &'static [Slide],
}

/// One displayable unit within a topic.
///
/// A closed set of slide kinds: each variant carries only the fields that
/// kind renders, so the view layer match is exhaustive.
#[derive(Debug)]
pub enum Slide {
    /// Full-screen topic opener: big heading, subheading, one-line blurb.
    Title {
        title: &'static str,
        subtitle: &'static str,
        description: &'static str,
    },
    /// Bullet list. Points may carry inline markdown emphasis. `diagram`
    /// marks slides that were delivered with a whiteboard sketch.
    Content {
        title: &'static str,
        points: &'static [&'static str],
        diagram: bool,
    },
    /// A source listing shown verbatim. The code is an opaque display
    /// string — highlighted for reading, never executed or parsed.
    Code {
        title: &'static str,
        description: Option<&'static str>,
        code: &'static str,
    },
}

/// The whole presentation. Static, read-only.
#[derive(Debug)]
pub struct Deck {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub topics: &'static [Topic],
}

impl Deck {
    pub fn topics(&self) -> &'static [Topic] {
        self.topics
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn topic(&self, topic_index: usize) -> &'static Topic {
        &self.topics[topic_index]
    }

    pub fn slide_count(&self, topic_index: usize) -> usize {
        self.topics[topic_index].slides.len()
    }

    pub fn slide(&self, topic_index: usize, slide_index: usize) -> &'static Slide {
        &self.topics[topic_index].slides[slide_index]
    }

    /// Total number of slides across all topics.
    pub fn total_slides(&self) -> usize {
        self.topics.iter().map(|t| t.slides.len()).sum()
    }

    /// Zero-based position of `(topic_index, slide_index)` if every topic's
    /// slides were concatenated in order. Drives the progress indicator.
    pub fn flat_index(&self, topic_index: usize, slide_index: usize) -> usize {
        self.topics[..topic_index]
            .iter()
            .map(|t| t.slides.len())
            .sum::<usize>()
            + slide_index
    }
}

/// The built-in deck.
pub fn curriculum() -> &'static Deck {
    &curriculum::DECK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curriculum_shape() {
        let deck = curriculum();
        assert_eq!(deck.topic_count(), 6);
        for topic in deck.topics() {
            assert!(!topic.slides.is_empty());
        }
        // The opening topic is a full hour of linked lists.
        assert_eq!(deck.topic(0).name, "Linked Lists");
        assert_eq!(deck.slide_count(0), 15);
    }

    #[test]
    fn test_topic_ids_are_sequential() {
        let deck = curriculum();
        for (index, topic) in deck.topics().iter().enumerate() {
            assert_eq!(topic.id as usize, index + 1);
        }
    }

    #[test]
    fn test_every_topic_opens_with_a_title_slide() {
        let deck = curriculum();
        for topic in deck.topics() {
            assert!(
                matches!(topic.slides[0], Slide::Title { .. }),
                "topic {} does not open with a title slide",
                topic.name
            );
        }
    }

    #[test]
    fn test_flat_index_spans_topic_boundaries() {
        let deck = curriculum();
        assert_eq!(deck.flat_index(0, 0), 0);
        assert_eq!(deck.flat_index(1, 0), deck.slide_count(0));
        let last_topic = deck.topic_count() - 1;
        let last_slide = deck.slide_count(last_topic) - 1;
        assert_eq!(
            deck.flat_index(last_topic, last_slide),
            deck.total_slides() - 1
        );
    }

    #[test]
    fn test_code_slides_are_nonempty() {
        let deck = curriculum();
        for topic in deck.topics() {
            for slide in topic.slides {
                if let Slide::Code { code, title, .. } = slide {
                    assert!(!code.trim().is_empty(), "empty code slide: {title}");
                }
            }
        }
    }
}
