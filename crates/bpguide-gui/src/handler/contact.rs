//! Contact form message handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{ContactMessage, Message};
use crate::state::AppState;

/// Handler for contact form messages.
///
/// Submitting never sends anything; the outcome is kept for the notice
/// under the form.
pub struct ContactHandler;

impl MessageHandler<ContactMessage> for ContactHandler {
    fn handle(&self, state: &mut AppState, msg: ContactMessage) -> Task<Message> {
        match msg {
            ContactMessage::FieldChanged(field, value) => {
                state.contact.set(field, value);
                state.contact_outcome = None;
            }

            ContactMessage::Submit => {
                state.contact_outcome = Some(state.contact.submit());
            }

            ContactMessage::DismissNotice => {
                state.contact_outcome = None;
            }
        }
        Task::none()
    }
}
