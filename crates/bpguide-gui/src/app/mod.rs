//! Main application module for the Unifier BP Guide viewer.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in [`App::update`]; views are pure functions
//! of [`AppState`].

mod keyboard;
mod subscription;

use bpguide_model::{GUIDE_TITLE, Guide};
use iced::{Element, Subscription, Task, Theme};
use tracing::debug;

use crate::handler::{ContactHandler, MessageHandler, NavigationHandler};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::guide_theme;
use crate::view::view_app;

pub use subscription::create_subscription;

// =============================================================================
// APPLICATION
// =============================================================================

/// Root of the Iced application.
#[derive(Debug, Default)]
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application with settings loaded from disk.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        (Self::with_state(AppState::with_settings(settings)), Task::none())
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Sidebar and header
            // =================================================================
            Message::Navigation(msg) => NavigationHandler.handle(&mut self.state, msg),

            // =================================================================
            // FAQ accordion
            // =================================================================
            Message::FaqToggled(index) => {
                self.state.guide.disclosure.toggle(index);
                Task::none()
            }

            // =================================================================
            // Contact form
            // =================================================================
            Message::Contact(msg) => ContactHandler.handle(&mut self.state, msg),

            // =================================================================
            // Runtime events
            // =================================================================
            Message::ContentScrolled(offset) => {
                if self.state.guide.scroll.observe(offset) {
                    debug!(
                        scrolled = self.state.guide.scroll.is_scrolled(),
                        "header style changed"
                    );
                }
                Task::none()
            }

            Message::WindowResized(size) => {
                self.state.viewport.width = size.width;
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title, with the active section when it has one.
    pub fn title(&self) -> String {
        let active = self.state.guide.navigation.active_section();
        match Guide::builtin().section(active.as_str()) {
            Some(section) => format!("{} - {GUIDE_TITLE}", section.title),
            None => GUIDE_TITLE.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        guide_theme(self.state.settings.display.theme_mode)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        create_subscription()
    }
}
