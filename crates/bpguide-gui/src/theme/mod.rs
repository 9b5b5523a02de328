//! Theme module for the guide viewer.
//!
//! - Base palettes for light and dark mode (`palette`)
//! - The `GuideColors` extension trait for colors Iced has no slot for
//!   (`colors`)
//! - Spacing and typography constants
//! - Widget style functions (`style`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;
pub mod typography;

pub use colors::{GuideColorSet, GuideColors, swatch};
pub use palette::{ThemeMode, guide_palette};
pub use spacing::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM,
    BORDER_RADIUS_XL, CHART_HEIGHT, CONTENT_MAX_WIDTH, FORM_MAX_WIDTH, HEADER_HEIGHT,
    ICON_SIZE_HERO, ICON_SIZE_LG, ICON_SIZE_MD, ICON_SIZE_XL, SIDEBAR_WIDTH, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, SPACING_XXL,
};
pub use typography::{
    FONT_BOLD, FONT_EXTRA_BOLD, FONT_SEMIBOLD, FONT_SIZE_BODY, FONT_SIZE_CAPTION,
    FONT_SIZE_DISPLAY, FONT_SIZE_HEADING, FONT_SIZE_HERO, FONT_SIZE_LEAD, FONT_SIZE_SMALL,
    FONT_SIZE_TITLE,
};

use iced::Theme;

/// Build the guide theme for `mode`.
pub fn guide_theme(mode: ThemeMode) -> Theme {
    Theme::custom(format!("Unifier BP Guide {}", mode.label()), guide_palette(mode))
}
