//! Header style flag derived from the content scroll offset.

use tracing::trace;

/// Offset (px) past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Record a new offset. Returns `true` when the flag changed.
    pub fn observe(&mut self, offset: f32) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        if changed {
            trace!(offset, scrolled, "header scroll style changed");
        }
        self.scrolled = scrolled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut state = ScrollState::default();
        assert!(!state.observe(10.0));
        assert!(!state.is_scrolled());
        assert!(state.observe(10.5));
        assert!(state.is_scrolled());
        assert!(!state.observe(400.0));
        assert!(state.observe(0.0));
        assert!(!state.is_scrolled());
    }
}
