//! Integration tests for the navigation, disclosure and scroll state.

use bpguide_model::{
    DisclosureState, GuideState, NavigationEffect, NavigationState, SECTIONS, resolve_content,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Select(String),
    Toggle,
    Close,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z-]{0,16}".prop_map(Op::Select),
        Just(Op::Toggle),
        Just(Op::Close),
    ]
}

fn apply(state: &mut NavigationState, op: Op) {
    match op {
        Op::Select(id) => {
            let _ = state.select_section(id);
        }
        Op::Toggle => state.toggle_sidebar(),
        Op::Close => state.close_sidebar(),
    }
}

proptest! {
    #[test]
    fn select_always_lands_on_id_with_sidebar_closed(
        history in proptest::collection::vec(op(), 0..12),
        id in "\\PC{0,24}",
    ) {
        let mut state = NavigationState::default();
        for op in history {
            apply(&mut state, op);
        }
        let effect = state.select_section(id.clone());
        prop_assert_eq!(effect, NavigationEffect::ScrollToTop);
        prop_assert!(state.is_active(&id));
        prop_assert!(!state.sidebar_open());
    }

    #[test]
    fn toggling_twice_restores_sidebar(history in proptest::collection::vec(op(), 0..12)) {
        let mut state = NavigationState::default();
        for op in history {
            apply(&mut state, op);
        }
        let before = state.sidebar_open();
        state.toggle_sidebar();
        state.toggle_sidebar();
        prop_assert_eq!(state.sidebar_open(), before);
    }

    #[test]
    fn disclosure_keeps_at_most_one_open(i in 0usize..8, j in 0usize..8) {
        let mut state = DisclosureState::default();
        state.toggle(i);
        state.toggle(i);
        prop_assert_eq!(state.expanded(), None);

        state.toggle(i);
        state.toggle(j);
        if i == j {
            prop_assert_eq!(state.expanded(), None);
        } else {
            prop_assert_eq!(state.expanded(), Some(j));
        }
    }
}

#[test]
fn initial_load_shows_introduction() {
    let state = GuideState::default();
    assert!(state.navigation.is_active("introduction"));
    assert!(!state.navigation.sidebar_open());
    assert!(state.disclosure.is_expanded(0));
    assert!(!state.scroll.is_scrolled());
    assert!(!resolve_content(state.navigation.active_section().as_str()).is_placeholder());
}

#[test]
fn clicking_through_the_sidebar_closes_it_each_time() {
    let mut state = GuideState::default();
    for title in ["Glossary", "Contact & Contribute"] {
        let section = SECTIONS
            .iter()
            .find(|s| s.title == title)
            .expect("section by title");
        state.navigation.toggle_sidebar();
        let _ = state.navigation.select_section(section.id.clone());
        assert!(!state.navigation.sidebar_open());
        assert!(!resolve_content(section.id.as_str()).is_placeholder());
    }
    assert!(state.navigation.is_active("contact"));
}

#[test]
fn opening_a_later_faq_collapses_the_first() {
    let mut state = GuideState::default();
    assert!(state.disclosure.is_expanded(0));
    state.disclosure.toggle(2);
    assert_eq!(state.disclosure.expanded(), Some(2));
}

#[test]
fn guide_state_at_selects_without_other_changes() {
    let state = GuideState::at("support");
    assert!(state.navigation.is_active("support"));
    assert_eq!(state.disclosure, DisclosureState::initial());
}
