//! Integration tests for content resolution and category grouping.

use bpguide_model::{
    Block, CATEGORIES, CONTENT, CategoryKey, Guide, Icon, Placeholder, Rendered, SECTIONS,
    resolve_content, sections_by_category,
};
use proptest::prelude::*;

fn is_content_id(id: &str) -> bool {
    CONTENT.iter().any(|entry| entry.id == id)
}

proptest! {
    #[test]
    fn unknown_ids_resolve_to_placeholder(id in "\\PC{0,24}") {
        prop_assume!(!is_content_id(&id));
        let rendered = resolve_content(&id);
        prop_assert!(rendered.is_placeholder());

        let Rendered::Placeholder(placeholder) = rendered else { unreachable!() };
        match SECTIONS.iter().find(|s| s.id == id.as_str()) {
            Some(section) => prop_assert_eq!(placeholder.title, section.title),
            None => prop_assert_eq!(placeholder, Placeholder { title: "", icon: Icon::GENERIC }),
        }
    }

    #[test]
    fn grouping_preserves_declaration_order(index in 0usize..CATEGORIES.len()) {
        let key = CATEGORIES[index].key;
        let grouped = sections_by_category(key);
        let expected: Vec<_> = SECTIONS.iter().filter(|s| s.category == key).collect();
        prop_assert_eq!(grouped, expected);
    }
}

#[test]
fn every_section_without_body_names_itself_in_the_placeholder() {
    for section in &SECTIONS {
        if let Rendered::Placeholder(placeholder) = resolve_content(section.id.as_str()) {
            assert!(placeholder.message().contains(section.title));
            assert_eq!(placeholder.heading(), "Content Coming Soon");
        }
    }
}

#[test]
fn glossary_and_contact_have_authored_bodies() {
    let glossary = resolve_content("glossary");
    let body = glossary.body().expect("glossary body");
    assert_eq!(
        body.walk()
            .filter(|b| matches!(b, Block::Term { .. }))
            .count(),
        3
    );

    let contact = resolve_content("contact");
    assert!(
        contact
            .body()
            .expect("contact body")
            .contains(|b| matches!(b, Block::ContactForm))
    );
}

#[test]
fn cost_management_embeds_both_charts() {
    let rendered = resolve_content("costManagement");
    let charts: Vec<_> = rendered
        .body()
        .expect("cost management body")
        .walk()
        .filter_map(|b| match b {
            Block::Chart { chart } => Some(*chart),
            _ => None,
        })
        .collect();
    assert_eq!(charts.len(), 2);
}

#[test]
fn navigation_groups_follow_category_order() {
    let groups = Guide::builtin().navigation_groups();
    let keys: Vec<_> = groups.iter().map(|g| g.category.key).collect();
    assert_eq!(
        keys,
        [
            CategoryKey::Introduction,
            CategoryKey::GettingStarted,
            CategoryKey::CoreFeatures,
            CategoryKey::AdvancedTopics,
            CategoryKey::Reporting,
            CategoryKey::Integrations,
            CategoryKey::Community,
        ]
    );
    let total: usize = groups.iter().map(|g| g.sections.len()).sum();
    assert_eq!(total, SECTIONS.len());
}

#[test]
fn navigation_groups_serialize_with_flattened_category() {
    let groups = Guide::builtin().navigation_groups();
    let json = serde_json::to_value(&groups[0]).expect("serialize group");
    assert_eq!(json["title"], "Introduction");
    assert_eq!(json["key"], "introduction");
    assert_eq!(json["sections"][1]["id"], "glossary");
}
