//! Message types for the Iced architecture.
//!
//! Every user interaction and runtime event becomes a [`Message`], handled
//! in `App::update()`.
//!
//! - [`NavigationMessage`] - sidebar and header
//! - [`ContactMessage`] - contact form

use bpguide_model::{ContactField, SectionId};
use iced::{Size, keyboard};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    Navigation(NavigationMessage),

    /// An FAQ header was clicked.
    FaqToggled(usize),

    Contact(ContactMessage),

    /// The main content pane scrolled to this vertical offset (px).
    ContentScrolled(f32),

    WindowResized(Size),

    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation (used for tasks that don't need a response).
    Noop,
}

/// Sidebar and header interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    /// A sidebar entry was clicked.
    SelectSection(SectionId),
    /// The header menu button was clicked.
    ToggleSidebar,
    /// The backdrop was clicked or Escape was pressed.
    CloseSidebar,
}

/// Contact form interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMessage {
    FieldChanged(ContactField, String),
    Submit,
    DismissNotice,
}

impl From<NavigationMessage> for Message {
    fn from(msg: NavigationMessage) -> Self {
        Self::Navigation(msg)
    }
}

impl From<ContactMessage> for Message {
    fn from(msg: ContactMessage) -> Self {
        Self::Contact(msg)
    }
}
