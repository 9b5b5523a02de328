//! Symbolic icons and color tokens.
//!
//! Nothing in the model draws anything. An [`Icon`] is a name that each
//! surface maps to its own glyph (Lucide font in the desktop viewer, a
//! Unicode glyph in exported documents), and a [`Swatch`] is a plain RGBA
//! value both surfaces convert into their own color type.

use std::fmt;

use serde::Serialize;

/// Symbolic glyph attached to sections, feature cards and placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    BookOpen,
    FileText,
    Settings,
    MapPin,
    DollarSign,
    Users,
    BarChart,
    Sparkles,
    Zap,
    Building,
    Send,
    HelpCircle,
    MessageSquare,
}

impl Icon {
    /// Icon used when nothing more specific is known.
    pub const GENERIC: Icon = Icon::HelpCircle;

    /// Stable kebab-case name, used for CSS classes.
    pub fn name(self) -> &'static str {
        match self {
            Self::BookOpen => "book-open",
            Self::FileText => "file-text",
            Self::Settings => "settings",
            Self::MapPin => "map-pin",
            Self::DollarSign => "dollar-sign",
            Self::Users => "users",
            Self::BarChart => "bar-chart",
            Self::Sparkles => "sparkles",
            Self::Zap => "zap",
            Self::Building => "building",
            Self::Send => "send",
            Self::HelpCircle => "help-circle",
            Self::MessageSquare => "message-square",
        }
    }

    /// Unicode stand-in for surfaces without an icon font.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::BookOpen => "\u{1F4D6}",
            Self::FileText => "\u{1F4C4}",
            Self::Settings => "\u{2699}",
            Self::MapPin => "\u{1F4CD}",
            Self::DollarSign => "$",
            Self::Users => "\u{1F465}",
            Self::BarChart => "\u{1F4CA}",
            Self::Sparkles => "\u{2728}",
            Self::Zap => "\u{26A1}",
            Self::Building => "\u{1F3E2}",
            Self::Send => "\u{2709}",
            Self::HelpCircle => "?",
            Self::MessageSquare => "\u{1F4AC}",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// COLORS
// =============================================================================

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Swatch {
    pub const WHITE: Swatch = Swatch::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color value; opaque colors render as hex.
    pub fn css(&self) -> String {
        if self.alpha >= 1.0 {
            self.hex()
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

/// Named accent color used for category headings and feature cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Purple,
    Green,
    Blue,
    Red,
    Yellow,
    Indigo,
    Pink,
}

impl Tone {
    /// The 600 shade, used for text.
    pub fn swatch(self) -> Swatch {
        match self {
            Self::Purple => Swatch::rgb(0x93, 0x33, 0xea),
            Self::Green => Swatch::rgb(0x16, 0xa3, 0x4a),
            Self::Blue => Swatch::rgb(0x25, 0x63, 0xeb),
            Self::Red => Swatch::rgb(0xdc, 0x26, 0x26),
            Self::Yellow => Swatch::rgb(0xca, 0x8a, 0x04),
            Self::Indigo => Swatch::rgb(0x4f, 0x46, 0xe5),
            Self::Pink => Swatch::rgb(0xdb, 0x27, 0x77),
        }
    }

    /// The 500 shade, the light end of a card gradient.
    pub fn light(self) -> Swatch {
        match self {
            Self::Purple => Swatch::rgb(0xa8, 0x55, 0xf7),
            Self::Green => Swatch::rgb(0x22, 0xc5, 0x5e),
            Self::Blue => Swatch::rgb(0x3b, 0x82, 0xf6),
            Self::Red => Swatch::rgb(0xef, 0x44, 0x44),
            Self::Yellow => Swatch::rgb(0xea, 0xb3, 0x08),
            Self::Indigo => Swatch::rgb(0x63, 0x66, 0xf1),
            Self::Pink => Swatch::rgb(0xec, 0x48, 0x99),
        }
    }

    /// The 700 shade, the dark end of a card gradient.
    pub fn dark(self) -> Swatch {
        match self {
            Self::Purple => Swatch::rgb(0x7e, 0x22, 0xce),
            Self::Green => Swatch::rgb(0x15, 0x80, 0x3d),
            Self::Blue => Swatch::rgb(0x1d, 0x4e, 0xd8),
            Self::Red => Swatch::rgb(0xb9, 0x1c, 0x1c),
            Self::Yellow => Swatch::rgb(0xa1, 0x62, 0x07),
            Self::Indigo => Swatch::rgb(0x43, 0x38, 0xca),
            Self::Pink => Swatch::rgb(0xbe, 0x18, 0x5d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_css_uses_hex_when_opaque() {
        assert_eq!(Swatch::rgb(0x3b, 0x82, 0xf6).css(), "#3b82f6");
        assert_eq!(
            Swatch::rgba(59, 130, 246, 0.2).css(),
            "rgba(59, 130, 246, 0.2)"
        );
    }

    #[test]
    fn icon_names_are_kebab_case() {
        assert_eq!(Icon::BookOpen.name(), "book-open");
        assert_eq!(Icon::GENERIC.to_string(), "help-circle");
    }
}
