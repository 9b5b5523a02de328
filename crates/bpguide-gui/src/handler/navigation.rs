//! Sidebar and header message handler.

use bpguide_model::NavigationEffect;
use iced::Task;
use iced::widget::{operation, scrollable};

use super::MessageHandler;
use crate::message::{Message, NavigationMessage};
use crate::state::AppState;
use crate::view::main_content_id;

/// Handler for navigation messages.
pub struct NavigationHandler;

impl MessageHandler<NavigationMessage> for NavigationHandler {
    fn handle(&self, state: &mut AppState, msg: NavigationMessage) -> Task<Message> {
        let navigation = &mut state.guide.navigation;
        match msg {
            NavigationMessage::SelectSection(id) => {
                let effect = navigation.select_section(id);
                perform(effect)
            }

            NavigationMessage::ToggleSidebar => {
                navigation.toggle_sidebar();
                Task::none()
            }

            NavigationMessage::CloseSidebar => {
                navigation.close_sidebar();
                Task::none()
            }
        }
    }
}

/// Turn a navigation effect into a runtime task.
fn perform(effect: NavigationEffect) -> Task<Message> {
    match effect {
        NavigationEffect::ScrollToTop => {
            operation::snap_to(main_content_id(), scrollable::RelativeOffset::START)
        }
    }
}
