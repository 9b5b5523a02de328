//! Navigation state machine: the active section and sidebar visibility.

use tracing::debug;

use crate::section::{DEFAULT_SECTION, SectionId};

/// Viewport width (px) below which the sidebar collapses.
pub const SIDEBAR_BREAKPOINT: f32 = 1024.0;

/// Side effect requested by a transition. The shell performs it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEffect {
    /// Scroll the main content pane back to its top.
    ScrollToTop,
}

/// How the sidebar is drawn for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPresentation {
    /// Wide viewport: always visible beside the content.
    Docked,
    /// Narrow viewport, sidebar closed.
    Hidden,
    /// Narrow viewport, sidebar open over the content with a backdrop.
    Overlay,
}

impl SidebarPresentation {
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether a dismiss-on-click backdrop covers the content.
    pub fn has_backdrop(self) -> bool {
        matches!(self, Self::Overlay)
    }
}

/// Current viewport size, as far as layout cares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    pub fn is_narrow(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(SIDEBAR_BREAKPOINT)
    }
}

/// Which section is shown and whether the sidebar is open.
///
/// Fields are private so that every change goes through a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active: SectionId,
    sidebar_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION,
            sidebar_open: false,
        }
    }
}

impl NavigationState {
    pub fn active_section(&self) -> &SectionId {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Show `id` and close the sidebar. Any id is accepted; unknown ids
    /// resolve to a placeholder when rendered.
    pub fn select_section(&mut self, id: impl Into<SectionId>) -> NavigationEffect {
        let id = id.into();
        debug!(from = %self.active, to = %id, "select section");
        self.active = id;
        self.sidebar_open = false;
        NavigationEffect::ScrollToTop
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        debug!(open = self.sidebar_open, "toggle sidebar");
    }

    pub fn close_sidebar(&mut self) {
        if self.sidebar_open {
            debug!("close sidebar");
        }
        self.sidebar_open = false;
    }

    /// Sidebar presentation for a viewport that is or isn't narrow.
    ///
    /// The open flag is kept as is when the viewport widens, so narrowing
    /// again shows the overlay that was open before.
    pub fn presentation(&self, narrow: bool) -> SidebarPresentation {
        match (narrow, self.sidebar_open) {
            (false, _) => SidebarPresentation::Docked,
            (true, false) => SidebarPresentation::Hidden,
            (true, true) => SidebarPresentation::Overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_introduction_with_sidebar_closed() {
        let state = NavigationState::default();
        assert_eq!(state.active_section(), &DEFAULT_SECTION);
        assert!(!state.sidebar_open());
    }

    #[test]
    fn select_closes_sidebar_and_scrolls() {
        let mut state = NavigationState::default();
        state.toggle_sidebar();
        let effect = state.select_section("glossary");
        assert_eq!(effect, NavigationEffect::ScrollToTop);
        assert!(state.is_active("glossary"));
        assert!(!state.sidebar_open());
    }

    #[test]
    fn presentation_follows_viewport_and_flag() {
        let mut state = NavigationState::default();
        assert_eq!(state.presentation(false), SidebarPresentation::Docked);
        assert_eq!(state.presentation(true), SidebarPresentation::Hidden);
        state.toggle_sidebar();
        assert_eq!(state.presentation(true), SidebarPresentation::Overlay);
        assert!(state.presentation(true).has_backdrop());
        assert_eq!(state.presentation(false), SidebarPresentation::Docked);
        assert!(state.sidebar_open());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(Viewport::new(1023.0).is_narrow(SIDEBAR_BREAKPOINT));
        assert!(!Viewport::new(1024.0).is_narrow(SIDEBAR_BREAKPOINT));
    }
}
