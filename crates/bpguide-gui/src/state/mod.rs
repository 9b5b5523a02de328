//! Application state.
//!
//! `AppState` owns the guide's UI state plus what only the desktop viewer
//! tracks: the contact form contents, the window width and the settings.

mod settings;

use bpguide_model::{ContactForm, GuideState, SidebarPresentation, SubmitOutcome, Viewport};

pub use settings::{DisplaySettings, Settings, SettingsError, WindowSettings};

#[derive(Debug, Clone)]
pub struct AppState {
    /// Navigation, FAQ and scroll state.
    pub guide: GuideState,
    pub contact: ContactForm,
    /// Result of the last submit, shown under the form until edited.
    pub contact_outcome: Option<SubmitOutcome>,
    pub viewport: Viewport,
    pub settings: Settings,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            guide: GuideState::default(),
            contact: ContactForm::default(),
            contact_outcome: None,
            viewport: Viewport::new(settings.window.width),
            settings,
        }
    }

    /// Whether the window is below the sidebar breakpoint.
    pub fn is_narrow(&self) -> bool {
        self.viewport
            .is_narrow(self.settings.display.sidebar_breakpoint)
    }

    pub fn sidebar_presentation(&self) -> SidebarPresentation {
        self.guide.navigation.presentation(self.is_narrow())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
