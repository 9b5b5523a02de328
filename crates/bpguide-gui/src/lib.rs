//! Desktop viewer for the Unifier BP Guide.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View). Content and UI state machines live in `bpguide-model`;
//! this crate only draws them and routes events.

pub mod app;
pub mod component;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
