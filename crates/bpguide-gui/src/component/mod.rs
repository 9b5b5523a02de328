//! Reusable UI components.
//!
//! Components are plain functions returning `Element`s. They take the data
//! they show and the message to emit, never the whole application state.

pub mod accordion;
pub mod chart;
pub mod feature_card;
pub mod form_field;
pub mod icon;
pub mod sidebar;
pub mod testimonial_card;

pub use accordion::accordion;
pub use chart::chart;
pub use feature_card::feature_card;
pub use form_field::form_field;
pub use icon::{LUCIDE_FONT_BYTES, icon, icon_close, icon_menu};
pub use sidebar::sidebar;
pub use testimonial_card::testimonial_card;
