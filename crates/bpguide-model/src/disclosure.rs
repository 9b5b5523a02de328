//! Single-expand accordion state for the FAQ list.

use tracing::debug;

/// Which FAQ entry, if any, is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    expanded: Option<usize>,
}

impl DisclosureState {
    /// The guide opens with the first question expanded.
    pub fn initial() -> Self {
        Self { expanded: Some(0) }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it and collapse the rest.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.is_expanded(index) {
            None
        } else {
            Some(index)
        };
        debug!(index, expanded = ?self.expanded, "toggle faq");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_collapsed_and_initial_opens_first() {
        assert_eq!(DisclosureState::default().expanded(), None);
        assert!(DisclosureState::initial().is_expanded(0));
    }

    #[test]
    fn opening_another_entry_collapses_the_current_one() {
        let mut state = DisclosureState::initial();
        state.toggle(2);
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(0));
        state.toggle(2);
        assert_eq!(state.expanded(), None);
    }
}
