//! Font sizes and weights.

use iced::Font;
use iced::font::Weight;

/// Captions, sidebar credit
pub const FONT_SIZE_CAPTION: f32 = 12.0;

/// Sidebar entries, labels
pub const FONT_SIZE_SMALL: f32 = 14.0;

/// Body text
pub const FONT_SIZE_BODY: f32 = 16.0;

/// Lead paragraphs
pub const FONT_SIZE_LEAD: f32 = 18.0;

/// Header title, subheadings
pub const FONT_SIZE_TITLE: f32 = 20.0;

/// Card titles
pub const FONT_SIZE_HEADING: f32 = 24.0;

/// Page titles
pub const FONT_SIZE_DISPLAY: f32 = 36.0;

/// Hero title
pub const FONT_SIZE_HERO: f32 = 48.0;

pub const FONT_SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

pub const FONT_BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const FONT_EXTRA_BOLD: Font = Font {
    weight: Weight::ExtraBold,
    ..Font::DEFAULT
};
