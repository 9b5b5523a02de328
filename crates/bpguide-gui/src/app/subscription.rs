//! Application subscriptions.
//!
//! | Subscription | Purpose |
//! |--------------|---------|
//! | Keyboard | Escape closes the overlay sidebar |
//! | Window resize | Tracks the width for the sidebar breakpoint |

use iced::{Subscription, keyboard, window};

use crate::message::Message;

/// Create all application subscriptions.
pub fn create_subscription() -> Subscription<Message> {
    Subscription::batch([keyboard_subscription(), resize_subscription()])
}

/// Listens for key presses to handle global shortcuts.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Window size changes, so the layout can switch at the breakpoint.
fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
