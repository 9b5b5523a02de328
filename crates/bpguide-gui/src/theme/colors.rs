//! Guide color extension trait.
//!
//! `GuideColors` adds the guide's own semantic colors to Iced's `Theme`,
//! covering what `ExtendedPalette` has no slot for (cards, code blocks, the
//! sidebar's active entry, the narrow-window backdrop).
//!
//! ```rust,ignore
//! .style(|theme: &Theme| {
//!     let guide = theme.guide();
//!     container::Style {
//!         background: Some(guide.surface.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use bpguide_model::Swatch;
use iced::{Color, Theme};

/// Guide-specific colors not covered by Iced's `ExtendedPalette`.
#[derive(Debug, Clone, Copy)]
pub struct GuideColorSet {
    /// Card and header background
    pub surface: Color,
    /// Header background once the content has scrolled
    pub surface_translucent: Color,
    /// Code block background
    pub surface_inset: Color,

    pub border_subtle: Color,
    pub border_input: Color,

    /// Headings
    pub text_strong: Color,
    /// Paragraphs
    pub text_body: Color,
    /// Captions, placeholder copy
    pub text_muted: Color,
    pub text_on_accent: Color,

    /// Active sidebar entry background
    pub nav_active_background: Color,
    /// Active sidebar entry text
    pub nav_active_text: Color,
    /// Hovered sidebar entry background
    pub nav_hover_background: Color,

    pub accent_hover: Color,
    /// Role line under a testimonial, FAQ icon
    pub accent_text: Color,
    /// Avatar ring
    pub accent_ring: Color,

    pub shadow: Color,
    pub shadow_strong: Color,
    /// Overlay behind the open sidebar on narrow windows
    pub backdrop: Color,
}

/// Extension trait for guide-specific colors.
pub trait GuideColors {
    fn guide(&self) -> GuideColorSet;
}

impl GuideColors for Theme {
    fn guide(&self) -> GuideColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;

        GuideColorSet {
            surface: if is_dark {
                Color::from_rgb8(0x1f, 0x29, 0x37)
            } else {
                Color::WHITE
            },
            surface_translucent: if is_dark {
                Color::from_rgba8(0x1f, 0x29, 0x37, 0.8)
            } else {
                Color::from_rgba(1.0, 1.0, 1.0, 0.8)
            },
            surface_inset: if is_dark {
                Color::from_rgb8(0x37, 0x41, 0x51)
            } else {
                Color::from_rgb8(0xf3, 0xf4, 0xf6)
            },

            border_subtle: if is_dark {
                Color::from_rgb8(0x37, 0x41, 0x51)
            } else {
                Color::from_rgb8(0xe5, 0xe7, 0xeb)
            },
            border_input: if is_dark {
                Color::from_rgb8(0x4b, 0x55, 0x63)
            } else {
                Color::from_rgb8(0xd1, 0xd5, 0xdb)
            },

            text_strong: if is_dark {
                Color::from_rgb8(0xf9, 0xfa, 0xfb)
            } else {
                Color::from_rgb8(0x11, 0x18, 0x27)
            },
            text_body: if is_dark {
                Color::from_rgb8(0xd1, 0xd5, 0xdb)
            } else {
                Color::from_rgb8(0x37, 0x41, 0x51)
            },
            text_muted: if is_dark {
                Color::from_rgb8(0x9c, 0xa3, 0xaf)
            } else {
                Color::from_rgb8(0x6b, 0x72, 0x80)
            },
            text_on_accent: Color::WHITE,

            nav_active_background: if is_dark {
                Color { a: 0.25, ..primary }
            } else {
                Color::from_rgb8(0xdb, 0xea, 0xfe)
            },
            nav_active_text: if is_dark {
                Color::from_rgb8(0x93, 0xc5, 0xfd)
            } else {
                Color::from_rgb8(0x1d, 0x4e, 0xd8)
            },
            nav_hover_background: if is_dark {
                Color::from_rgb8(0x37, 0x41, 0x51)
            } else {
                Color::from_rgb8(0xf3, 0xf4, 0xf6)
            },

            accent_hover: if is_dark {
                Color::from_rgb8(0x60, 0xa5, 0xfa)
            } else {
                Color::from_rgb8(0x1d, 0x4e, 0xd8)
            },
            accent_text: primary,
            accent_ring: Color::from_rgb8(0xbf, 0xdb, 0xfe),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }
}

/// Convert a model color into an Iced color.
pub fn swatch(color: Swatch) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.alpha)
}
