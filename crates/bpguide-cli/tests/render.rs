//! Integration tests for the HTML export.

use bpguide_cli::render::{INDEX_FILE, render_page, write_documents};
use bpguide_model::{Guide, GuideState, Placeholder};

fn page(id: &str) -> String {
    render_page(&Guide::builtin(), &GuideState::at(id.to_owned())).expect("render page")
}

#[test]
fn every_sidebar_section_renders_with_one_active_entry() {
    let guide = Guide::builtin();
    for section in guide.sections {
        let html = page(section.id.as_str());
        assert!(html.contains(r#"<nav id="sidebar""#), "{}", section.id);
        assert_eq!(
            html.matches(r#"aria-current="page""#).count(),
            1,
            "{}",
            section.id
        );
        let active_link = format!(r#"href="{}.html" aria-current="page""#, section.id);
        assert!(html.contains(&active_link), "{}", section.id);

        let has_body = guide.content(section.id.as_str()).is_some();
        assert_eq!(
            html.contains(Placeholder::HEADING),
            !has_body,
            "{}",
            section.id
        );
    }
}

#[test]
fn exported_pages_start_with_sidebar_closed() {
    let html = page("glossary");
    assert!(html.contains(r#"class="sidebar-toggle">"#));
    assert!(!html.contains(" checked>"));
}

#[test]
fn unknown_section_renders_generic_placeholder() {
    let html = page("not-a-section");
    assert!(html.contains(Placeholder::HEADING));
    assert!(!html.contains(r#"aria-current="page""#));
    assert!(html.contains("<title>Oracle Unifier BP Guide</title>"));
}

#[test]
fn cost_management_embeds_svg_charts_with_tooltips() {
    let html = page("costManagement");
    assert_eq!(html.matches("<svg ").count(), 2);
    assert!(html.contains("$100K"));
    assert!(html.contains("Line items with WBS code: 45%"));
}

#[test]
fn support_page_opens_only_the_first_faq() {
    let html = page("support");
    assert_eq!(html.matches(r#"<details class="faq" name="faq""#).count(), 4);
    assert_eq!(html.matches(r#"name="faq" open>"#).count(), 1);
}

#[test]
fn contact_form_has_no_action() {
    let html = page("contact");
    assert!(html.contains("<form "));
    assert!(!html.contains("action="));
    assert!(html.contains(r#"id="email""#));
    assert!(html.contains("Send Message"));
}

#[test]
fn write_documents_produces_index_and_each_section() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("site");
    let ids = vec!["introduction".to_string(), "forum".to_string()];

    let written = write_documents(&Guide::builtin(), &out, &ids).expect("write documents");

    assert_eq!(written.len(), 3);
    assert_eq!(written[0], out.join(INDEX_FILE));
    let index = std::fs::read_to_string(out.join(INDEX_FILE)).expect("read index");
    let intro = std::fs::read_to_string(out.join("introduction.html")).expect("read intro");
    assert_eq!(index, intro);
    let forum = std::fs::read_to_string(out.join("forum.html")).expect("read forum");
    assert!(forum.contains(Placeholder::HEADING));
}
