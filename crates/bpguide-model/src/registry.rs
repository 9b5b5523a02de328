//! Content and category lookups over the guide's tables.
//!
//! [`Guide`] borrows every table it reads, so tests can resolve against
//! hand-built tables while both surfaces use [`Guide::builtin`].

use serde::Serialize;

use crate::category::{CATEGORIES, Category, CategoryKey};
use crate::community::{FAQS, Faq, TESTIMONIALS, Testimonial};
use crate::content::{CONTENT, ContentBody, ContentEntry, Placeholder, Rendered};
use crate::icon::Icon;
use crate::section::{SECTIONS, Section};

/// One sidebar group: a category and its sections in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationGroup<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub sections: Vec<&'a Section>,
}

impl NavigationGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Read-only view over the guide's registries.
#[derive(Debug, Clone, Copy)]
pub struct Guide<'a> {
    pub categories: &'a [Category],
    pub sections: &'a [Section],
    pub content: &'a [ContentEntry],
    pub testimonials: &'a [Testimonial],
    pub faqs: &'a [Faq],
}

impl Guide<'static> {
    /// The tables shipped with the guide.
    pub fn builtin() -> Self {
        Self {
            categories: &CATEGORIES,
            sections: &SECTIONS,
            content: &CONTENT,
            testimonials: &TESTIMONIALS,
            faqs: &FAQS,
        }
    }
}

impl Default for Guide<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Guide<'a> {
    /// Section metadata for `id`.
    pub fn section(&self, id: &str) -> Option<&'a Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Authored body for `id`, if one exists.
    pub fn content(&self, id: &str) -> Option<&'a ContentBody> {
        self.content.iter().find(|e| e.id == id).map(|e| &e.body)
    }

    /// What the main pane shows for `id`. Total over every string.
    ///
    /// Without an authored body the result is a placeholder named after the
    /// section, or an untitled generic placeholder when the section is
    /// unknown as well.
    pub fn resolve(&self, id: &str) -> Rendered<'a> {
        if let Some(body) = self.content(id) {
            return Rendered::Body(body);
        }

        let placeholder = match self.section(id) {
            Some(section) => Placeholder {
                title: section.title,
                icon: section.icon,
            },
            None => Placeholder {
                title: "",
                icon: Icon::GENERIC,
            },
        };
        Rendered::Placeholder(placeholder)
    }

    /// Sections in `key`, in declaration order.
    pub fn sections_by_category(&self, key: CategoryKey) -> Vec<&'a Section> {
        self.sections.iter().filter(|s| s.category == key).collect()
    }

    /// Every category in order with its sections, empty groups included.
    pub fn navigation_groups(&self) -> Vec<NavigationGroup<'a>> {
        self.categories
            .iter()
            .map(|category| NavigationGroup {
                category,
                sections: self.sections_by_category(category.key),
            })
            .collect()
    }

    /// Ids of every authored body, in table order.
    pub fn content_ids(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.content.iter().map(|e| e.id)
    }

    /// Authored bodies that no section points at.
    pub fn orphan_content_ids(&self) -> Vec<&'a str> {
        let sections = self.sections;
        self.content_ids()
            .filter(|id| !sections.iter().any(|s| s.id == *id))
            .collect()
    }

    /// Sections that fall back to the placeholder.
    pub fn sections_without_content(&self) -> Vec<&'a Section> {
        self.sections
            .iter()
            .filter(|s| self.content(s.id.as_str()).is_none())
            .collect()
    }
}

/// Resolve `id` against the shipped tables.
pub fn resolve_content(id: &str) -> Rendered<'static> {
    Guide::builtin().resolve(id)
}

/// Sections in `key` from the shipped tables.
pub fn sections_by_category(key: CategoryKey) -> Vec<&'static Section> {
    Guide::builtin().sections_by_category(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Block;

    #[test]
    fn known_section_without_body_uses_its_own_title() {
        let rendered = resolve_content("setup");
        assert_eq!(
            rendered,
            Rendered::Placeholder(Placeholder {
                title: "Initial Setup",
                icon: Icon::Settings,
            })
        );
    }

    #[test]
    fn unknown_id_gets_an_untitled_generic_placeholder() {
        let Rendered::Placeholder(placeholder) = resolve_content("no-such-page") else {
            panic!("expected placeholder");
        };
        assert_eq!(placeholder.title, "");
        assert_eq!(placeholder.icon, Icon::GENERIC);
    }

    #[test]
    fn orphan_bodies_resolve_by_id() {
        let rendered = resolve_content("line-item-bp");
        let body = rendered.body().expect("authored body");
        assert!(body.contains(|b| matches!(b, Block::Steps { .. })));
    }

    #[test]
    fn groups_include_empty_categories() {
        let groups = Guide::builtin().navigation_groups();
        assert_eq!(groups.len(), 7);
        assert!(groups[3].is_empty());
        assert_eq!(groups[3].category.key, CategoryKey::AdvancedTopics);
        assert_eq!(groups[6].sections.len(), 3);
    }

    #[test]
    fn shipped_orphans_are_the_kebab_case_bodies() {
        assert_eq!(
            Guide::builtin().orphan_content_ids(),
            [
                "document-control",
                "line-item-bp",
                "reporting-analytics",
                "data-connectors"
            ]
        );
    }

    #[test]
    fn hand_built_tables_resolve_independently() {
        static ONLY: [ContentEntry; 1] = [ContentEntry {
            id: "introduction",
            body: ContentBody { blocks: &[] },
        }];
        let guide = Guide {
            content: &ONLY,
            ..Guide::builtin()
        };
        assert!(!guide.resolve("introduction").is_placeholder());
        assert!(guide.resolve("glossary").is_placeholder());
        assert_eq!(guide.sections_without_content().len(), 13);
    }
}
