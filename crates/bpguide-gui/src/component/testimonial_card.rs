//! Testimonial card with an initials avatar.

use bpguide_model::Testimonial;
use iced::widget::{column, container, text};
use iced::{Border, Element, Length, Theme};

use crate::theme::style::card;
use crate::theme::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, FONT_BOLD, FONT_SIZE_BODY, FONT_SIZE_HEADING,
    FONT_SIZE_LEAD, FONT_SIZE_SMALL, GuideColors, SPACING_LG, SPACING_XL, SPACING_XS,
};

/// One testimonial. The viewer does no network I/O, so the portrait is
/// replaced by the author's initials.
pub fn testimonial_card<'a, M: 'a>(testimonial: &'a Testimonial) -> Element<'a, M> {
    let avatar = container(
        text(testimonial.initials())
            .size(FONT_SIZE_HEADING)
            .font(FONT_BOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().nav_active_text),
            }),
    )
    .center(AVATAR_SIZE)
    .style(|theme: &Theme| {
        let guide = theme.guide();
        container::Style {
            background: Some(guide.nav_active_background.into()),
            border: Border {
                color: guide.accent_ring,
                width: 4.0,
                radius: BORDER_RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    });

    let quote = text(format!("\"{}\"", testimonial.quote))
        .size(FONT_SIZE_BODY)
        .font(iced::Font {
            style: iced::font::Style::Italic,
            ..iced::Font::DEFAULT
        })
        .center()
        .style(|theme: &Theme| text::Style {
            color: Some(theme.guide().text_muted),
        });

    let author = column![
        text(testimonial.name)
            .size(FONT_SIZE_LEAD)
            .font(FONT_BOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_strong),
            }),
        text(testimonial.role)
            .size(FONT_SIZE_SMALL)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().accent_text),
            }),
    ]
    .spacing(SPACING_XS)
    .align_x(iced::Alignment::Center);

    container(
        column![avatar, quote, author]
            .spacing(SPACING_LG)
            .align_x(iced::Alignment::Center),
    )
    .padding(SPACING_XL)
    .width(Length::Fill)
    .style(card)
    .into()
}
