//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message family and
//! gets the full application state:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Navigation(msg) => NavigationHandler.handle(&mut self.state, msg),
//!         Message::Contact(msg) => ContactHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod contact;
mod navigation;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use contact::ContactHandler;
pub use navigation::NavigationHandler;

/// Trait for handling one message type.
pub trait MessageHandler<M> {
    /// Apply `msg` to `state` and return any follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
