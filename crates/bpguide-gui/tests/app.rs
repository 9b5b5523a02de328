//! Integration tests for `App::update`.

use bpguide_gui::App;
use bpguide_gui::message::{ContactMessage, Message, NavigationMessage};
use bpguide_gui::state::AppState;
use bpguide_model::{ContactField, SectionId, SidebarPresentation, SubmitOutcome};
use iced::{Size, keyboard};

fn app() -> App {
    App::with_state(AppState::default())
}

fn narrow_app() -> App {
    let mut app = app();
    let _ = app.update(Message::WindowResized(Size::new(800.0, 600.0)));
    app
}

fn select(id: &str) -> Message {
    Message::Navigation(NavigationMessage::SelectSection(SectionId::from(id.to_owned())))
}

#[test]
fn starts_on_introduction_with_docked_sidebar() {
    let app = app();
    assert!(app.state.guide.navigation.is_active("introduction"));
    assert_eq!(app.state.sidebar_presentation(), SidebarPresentation::Docked);
    assert_eq!(app.title(), "Welcome to the Guide - Oracle Unifier BP Guide");
}

#[test]
fn selecting_a_section_changes_page_and_title() {
    let mut app = app();
    let _ = app.update(select("glossary"));
    assert!(app.state.guide.navigation.is_active("glossary"));
    assert_eq!(app.title(), "Glossary - Oracle Unifier BP Guide");
}

#[test]
fn unknown_section_keeps_plain_title() {
    let mut app = app();
    let _ = app.update(select("does-not-exist"));
    assert_eq!(app.title(), "Oracle Unifier BP Guide");
}

#[test]
fn narrow_window_hides_sidebar_until_toggled() {
    let mut app = narrow_app();
    assert_eq!(app.state.sidebar_presentation(), SidebarPresentation::Hidden);

    let _ = app.update(Message::Navigation(NavigationMessage::ToggleSidebar));
    assert_eq!(app.state.sidebar_presentation(), SidebarPresentation::Overlay);

    let _ = app.update(Message::Navigation(NavigationMessage::CloseSidebar));
    assert_eq!(app.state.sidebar_presentation(), SidebarPresentation::Hidden);
}

#[test]
fn selecting_from_overlay_closes_it() {
    let mut app = narrow_app();
    let _ = app.update(Message::Navigation(NavigationMessage::ToggleSidebar));
    let _ = app.update(select("contact"));
    assert!(!app.state.guide.navigation.sidebar_open());
    assert!(app.state.guide.navigation.is_active("contact"));
}

#[test]
fn escape_closes_overlay() {
    let mut app = narrow_app();
    let _ = app.update(Message::Navigation(NavigationMessage::ToggleSidebar));
    let _ = app.update(Message::KeyPressed(
        keyboard::Key::Named(keyboard::key::Named::Escape),
        keyboard::Modifiers::default(),
    ));
    assert!(!app.state.guide.navigation.sidebar_open());
}

#[test]
fn widening_the_window_docks_an_open_sidebar() {
    let mut app = narrow_app();
    let _ = app.update(Message::Navigation(NavigationMessage::ToggleSidebar));
    let _ = app.update(Message::WindowResized(Size::new(1024.0, 600.0)));
    assert_eq!(app.state.sidebar_presentation(), SidebarPresentation::Docked);
}

#[test]
fn faq_toggles_one_at_a_time() {
    let mut app = app();
    assert!(app.state.guide.disclosure.is_expanded(0));

    let _ = app.update(Message::FaqToggled(1));
    assert_eq!(app.state.guide.disclosure.expanded(), Some(1));

    let _ = app.update(Message::FaqToggled(1));
    assert_eq!(app.state.guide.disclosure.expanded(), None);
}

#[test]
fn header_style_follows_scroll_offset() {
    let mut app = app();
    let _ = app.update(Message::ContentScrolled(10.0));
    assert!(!app.state.guide.scroll.is_scrolled());

    let _ = app.update(Message::ContentScrolled(10.5));
    assert!(app.state.guide.scroll.is_scrolled());

    let _ = app.update(Message::ContentScrolled(0.0));
    assert!(!app.state.guide.scroll.is_scrolled());
}

#[test]
fn contact_submit_reports_and_editing_clears_notice() {
    let mut app = app();
    let _ = app.update(Message::Contact(ContactMessage::Submit));
    assert!(matches!(
        app.state.contact_outcome,
        Some(SubmitOutcome::Invalid(_))
    ));

    for (field, value) in [
        (ContactField::Name, "Dana"),
        (ContactField::Email, "dana@example.com"),
        (ContactField::Message, "Hello"),
    ] {
        let _ = app.update(Message::Contact(ContactMessage::FieldChanged(
            field,
            value.to_string(),
        )));
        assert_eq!(app.state.contact_outcome, None);
    }

    let _ = app.update(Message::Contact(ContactMessage::Submit));
    assert_eq!(app.state.contact_outcome, Some(SubmitOutcome::NoEndpoint));
    assert_eq!(app.state.contact.name, "Dana");

    let _ = app.update(Message::Contact(ContactMessage::DismissNotice));
    assert_eq!(app.state.contact_outcome, None);
}
