//! Gradient call-out cards on the introduction page.

use bpguide_model::FeatureCard;
use iced::gradient::Linear;
use iced::widget::{column, container, text};
use iced::{Background, Border, Color, Degrees, Element, Length, Shadow, Theme, Vector};

use super::icon::icon;
use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_XL, FONT_BOLD, FONT_SIZE_BODY, FONT_SIZE_TITLE,
    ICON_SIZE_XL, SPACING_SM, SPACING_XL, swatch,
};

/// One feature card: an icon in a translucent well, a title and a short
/// description, white on a diagonal gradient of the card's tone.
pub fn feature_card<'a, M: 'static>(card: &'a FeatureCard) -> Element<'a, M> {
    let light = swatch(card.tone.light());
    let dark = swatch(card.tone.dark());

    let well = container(icon(card.icon).size(ICON_SIZE_XL).color(Color::WHITE))
        .center(64.0)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.2).into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let body = column![
        well,
        text(card.title)
            .size(FONT_SIZE_TITLE)
            .font(FONT_BOLD)
            .color(Color::WHITE)
            .center(),
        text(card.description)
            .size(FONT_SIZE_BODY)
            .color(Color::from_rgba(1.0, 1.0, 1.0, 0.9))
            .center(),
    ]
    .spacing(SPACING_SM)
    .align_x(iced::Alignment::Center);

    container(body)
        .padding(SPACING_XL)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Gradient(
                Linear::new(Degrees(135.0))
                    .add_stop(0.0, light)
                    .add_stop(1.0, dark)
                    .into(),
            )),
            border: Border {
                radius: BORDER_RADIUS_XL.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 10.0),
                blur_radius: 15.0,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use bpguide_model::{Icon, Tone};

    use super::*;
    use crate::message::Message;

    #[test]
    fn card_builds_as_an_app_element() {
        let card = FeatureCard {
            title: "Core Cost Management",
            description: "Master budget, commitments, and cash flow.",
            icon: Icon::DollarSign,
            tone: Tone::Blue,
        };
        let element: Element<'_, Message> = feature_card(&card);
        drop(element);
    }
}
