//! The guide's complete UI state.

use crate::disclosure::DisclosureState;
use crate::navigation::NavigationState;
use crate::scroll::ScrollState;

/// Everything the shell needs to draw one frame of the guide.
///
/// Owned by whichever surface hosts the guide and passed to views by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideState {
    pub navigation: NavigationState,
    pub disclosure: DisclosureState,
    pub scroll: ScrollState,
}

impl Default for GuideState {
    fn default() -> Self {
        Self {
            navigation: NavigationState::default(),
            disclosure: DisclosureState::initial(),
            scroll: ScrollState::default(),
        }
    }
}

impl GuideState {
    /// Initial state with `id` already selected, as a freshly loaded
    /// document for that section would show it.
    pub fn at(id: impl Into<crate::section::SectionId>) -> Self {
        let mut state = Self::default();
        // A fresh document has nothing to scroll.
        let _ = state.navigation.select_section(id);
        state
    }
}
