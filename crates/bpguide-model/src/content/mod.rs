//! Authored content bodies.
//!
//! A [`ContentBody`] is a flat list of [`Block`]s. Both surfaces walk the
//! same blocks, so the desktop viewer and the exported documents always show
//! the same text.

mod pages;

use crate::chart::ChartKind;
use crate::icon::{Icon, Tone};

pub use pages::CONTENT;

/// A labelled bullet, rendered as "**label:** text" when a label is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub label: Option<&'static str>,
    pub text: &'static str,
}

impl Item {
    pub const fn labelled(label: &'static str, text: &'static str) -> Self {
        Self {
            label: Some(label),
            text,
        }
    }
}

/// A small static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

/// A colored call-out card on the introduction page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

/// One renderable unit of a content body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Large centered page title with a lead paragraph.
    Hero {
        title: &'static str,
        lead: &'static str,
    },
    /// Page or section title.
    Title { text: &'static str },
    /// Introductory paragraph under a title.
    Lead { text: &'static str },
    Paragraph { text: &'static str },
    /// Heading inside a card.
    Subheading { text: &'static str },
    Bullets { items: &'static [Item] },
    /// Numbered steps.
    Steps { items: &'static [&'static str] },
    Code { source: &'static str },
    Table { table: Table },
    /// Titled group of leaf blocks. Cards do not nest.
    Card {
        title: &'static str,
        blocks: &'static [Block],
    },
    /// Glossary entry.
    Term {
        name: &'static str,
        definition: &'static str,
    },
    FeatureCards { cards: &'static [FeatureCard] },
    Chart { chart: ChartKind },
    /// The testimonial grid.
    Testimonials,
    /// The FAQ accordion.
    Faq,
    /// The contact form.
    ContactForm,
}

impl Block {
    /// Whether this block is a card.
    pub fn is_card(&self) -> bool {
        matches!(self, Self::Card { .. })
    }
}

/// Authored content for one section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBody {
    pub blocks: &'static [Block],
}

impl ContentBody {
    /// Every block, with card contents flattened in after their card.
    pub fn walk(&self) -> impl Iterator<Item = &'static Block> {
        self.blocks.iter().flat_map(|block| {
            let inner: &'static [Block] = match block {
                Block::Card { blocks, .. } => *blocks,
                _ => &[],
            };
            std::iter::once(block).chain(inner.iter())
        })
    }

    /// Whether any block (including inside cards) matches `predicate`.
    pub fn contains(&self, predicate: impl Fn(&Block) -> bool) -> bool {
        self.walk().any(predicate)
    }
}

/// A content table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentEntry {
    pub id: &'static str,
    pub body: ContentBody,
}

// =============================================================================
// RESOLUTION RESULT
// =============================================================================

/// Fallback shown when no authored body exists for an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Title of the matching section, empty when the section is unknown too.
    pub title: &'static str,
    pub icon: Icon,
}

impl Placeholder {
    pub const HEADING: &'static str = "Content Coming Soon";

    pub fn heading(&self) -> &'static str {
        Self::HEADING
    }

    pub fn message(&self) -> String {
        format!(
            "Detailed information about {} will be added here. This section will cover \
             comprehensive guidelines, best practices, and implementation details.",
            self.title
        )
    }
}

/// What the main pane shows for an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered<'a> {
    Body(&'a ContentBody),
    Placeholder(Placeholder),
}

impl Rendered<'_> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    pub fn body(&self) -> Option<&ContentBody> {
        match self {
            Self::Body(body) => Some(body),
            Self::Placeholder(_) => None,
        }
    }
}
