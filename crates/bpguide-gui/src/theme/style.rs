//! Widget style functions.
//!
//! Style functions receive `&Theme` and resolve colors through
//! [`GuideColors`], so they follow the light/dark setting automatically.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors::GuideColors;
use super::spacing::{BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_RADIUS_XL};

// =============================================================================
// BUTTONS
// =============================================================================

/// Filled primary button (contact form submit).
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let guide = theme.guide();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => guide.accent_hover,
        button::Status::Active => palette.primary.base.color,
        button::Status::Disabled => palette.primary.weak.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: guide.text_on_accent,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Borderless icon button (header menu toggle).
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let guide = theme.guide();

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(guide.nav_hover_background.into())
            }
            _ => None,
        },
        text_color: guide.text_body,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sidebar entry. Active entries are tinted; others tint on hover.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let guide = theme.guide();
        let (background, text_color) = if active {
            (Some(guide.nav_active_background), guide.nav_active_text)
        } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
            (Some(guide.nav_hover_background), guide.text_strong)
        } else {
            (None, guide.text_muted)
        };

        button::Style {
            background: background.map(Background::from),
            text_color,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Accordion header: flat, inherits the card behind it.
pub fn accordion_header(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.guide().text_strong,
        ..Default::default()
    }
}

// =============================================================================
// CONTAINERS
// =============================================================================

/// Raised white card used for content groups.
pub fn card(theme: &Theme) -> container::Style {
    let guide = theme.guide();
    container::Style {
        background: Some(guide.surface.into()),
        border: Border {
            color: guide.border_subtle,
            width: 1.0,
            radius: BORDER_RADIUS_XL.into(),
        },
        shadow: Shadow {
            color: guide.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Accordion item: a smaller card with a lighter shadow.
pub fn accordion_item(theme: &Theme) -> container::Style {
    let guide = theme.guide();
    container::Style {
        background: Some(guide.surface.into()),
        border: Border {
            color: guide.border_subtle,
            width: 1.0,
            radius: BORDER_RADIUS_LG.into(),
        },
        shadow: Shadow {
            color: guide.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Monospace code block.
pub fn code_block(theme: &Theme) -> container::Style {
    let guide = theme.guide();
    container::Style {
        background: Some(guide.surface_inset.into()),
        text_color: Some(guide.text_strong),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Fixed header. Once content scrolls it turns translucent and casts a
/// shadow.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let guide = theme.guide();
        if scrolled {
            container::Style {
                background: Some(guide.surface_translucent.into()),
                shadow: Shadow {
                    color: guide.shadow_strong,
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 6.0,
                },
                ..Default::default()
            }
        } else {
            container::Style {
                background: Some(guide.surface.into()),
                border: Border {
                    color: guide.border_subtle,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            }
        }
    }
}

/// Sidebar panel with a right border.
pub fn sidebar_panel(theme: &Theme) -> container::Style {
    let guide = theme.guide();
    container::Style {
        background: Some(guide.surface.into()),
        border: Border {
            color: guide.border_subtle,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dimmed overlay behind the open sidebar.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.guide().backdrop.into()),
        ..Default::default()
    }
}

/// Notice under the contact form.
pub fn notice(is_error: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.extended_palette();
        let pair = if is_error {
            palette.danger.weak
        } else {
            palette.primary.weak
        };
        container::Style {
            background: Some(pair.color.into()),
            text_color: Some(pair.text),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// INPUTS
// =============================================================================

/// Default text input with a focus ring in the accent color.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let guide = theme.guide();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => guide.text_muted,
        text_input::Status::Active | text_input::Status::Disabled => guide.border_input,
    };

    text_input::Style {
        background: guide.surface.into(),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: border_color,
        },
        icon: guide.text_muted,
        placeholder: guide.text_muted,
        value: guide.text_strong,
        selection: guide.nav_active_background,
    }
}
