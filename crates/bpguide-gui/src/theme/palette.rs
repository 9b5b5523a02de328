//! Base palettes for the guide theme.
//!
//! Light mode is the web guide's gray/blue scheme. Dark mode is the
//! same hues on a slate background.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Iced palette for `mode`. Iced derives its extended palette from this.
pub fn guide_palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => light(),
        ThemeMode::Dark => dark(),
    }
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb8(0xf9, 0xfa, 0xfb), // gray-50
        text: Color::from_rgb8(0x1f, 0x29, 0x37),       // gray-800
        primary: Color::from_rgb8(0x25, 0x63, 0xeb),    // blue-600
        success: Color::from_rgb8(0x10, 0xb9, 0x81),
        warning: Color::from_rgb8(0xf5, 0x9e, 0x0b),
        danger: Color::from_rgb8(0xef, 0x44, 0x44),
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb8(0x11, 0x18, 0x27), // gray-900
        text: Color::from_rgb8(0xf3, 0xf4, 0xf6),       // gray-100
        primary: Color::from_rgb8(0x3b, 0x82, 0xf6),    // blue-500
        success: Color::from_rgb8(0x34, 0xd3, 0x99),
        warning: Color::from_rgb8(0xfb, 0xbf, 0x24),
        danger: Color::from_rgb8(0xf8, 0x71, 0x71),
    }
}
