//! Lucide glyphs for the guide's symbolic icons.
//!
//! See <https://lucide.dev/icons/> for the catalog.

use bpguide_model::Icon;
use iced::widget::Text;
use iced_fonts::lucide;

// Re-export the Lucide font bytes for loading in main.rs
pub use iced_fonts::LUCIDE_FONT_BYTES;

/// Lucide glyph for a model icon.
pub fn icon(icon: Icon) -> Text<'static> {
    match icon {
        Icon::BookOpen => lucide::book_open(),
        Icon::FileText => lucide::file_text(),
        Icon::Settings => lucide::settings(),
        Icon::MapPin => lucide::map_pin(),
        Icon::DollarSign => lucide::dollar_sign(),
        Icon::Users => lucide::users(),
        Icon::BarChart => lucide::chart_column(),
        Icon::Sparkles => lucide::wand_sparkles(),
        Icon::Zap => lucide::zap(),
        Icon::Building => lucide::building_two(),
        Icon::Send => lucide::send(),
        Icon::HelpCircle => lucide::circle_help(),
        Icon::MessageSquare => lucide::message_square(),
    }
}

/// Menu icon - header button while the sidebar is closed
pub fn icon_menu() -> Text<'static> {
    lucide::menu()
}

/// X icon - header button while the sidebar is open
pub fn icon_close() -> Text<'static> {
    lucide::x()
}

/// Chevron down - collapsed accordion item
pub fn icon_chevron_down() -> Text<'static> {
    lucide::chevron_down()
}

/// Chevron up - expanded accordion item
pub fn icon_chevron_up() -> Text<'static> {
    lucide::chevron_up()
}
