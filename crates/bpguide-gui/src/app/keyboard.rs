//! Keyboard shortcuts.

use iced::{Task, keyboard};

use super::App;
use crate::handler::{MessageHandler, NavigationHandler};
use crate::message::{Message, NavigationMessage};

impl App {
    /// Handle a key press from the global keyboard subscription.
    pub(super) fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            // Escape: dismiss the overlay sidebar
            keyboard::Key::Named(keyboard::key::Named::Escape)
                if self.state.guide.navigation.sidebar_open() =>
            {
                NavigationHandler.handle(&mut self.state, NavigationMessage::CloseSidebar)
            }

            _ => Task::none(),
        }
    }
}
