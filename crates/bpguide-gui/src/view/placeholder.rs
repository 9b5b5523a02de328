//! "Content Coming Soon" card for sections without authored content.

use bpguide_model::Placeholder;
use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use crate::component::icon;
use crate::theme::style::card;
use crate::theme::{
    FONT_SEMIBOLD, FONT_SIZE_BODY, FONT_SIZE_HEADING, GuideColors, ICON_SIZE_HERO, SPACING_LG,
    SPACING_MD, SPACING_XL,
};

pub fn view_placeholder<'a, M: 'a>(placeholder: Placeholder) -> Element<'a, M> {
    let glyph = icon(placeholder.icon)
        .size(ICON_SIZE_HERO)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.guide().text_muted.scale_alpha(0.5)),
        });

    let body = column![
        glyph,
        text(placeholder.heading())
            .size(FONT_SIZE_HEADING)
            .font(FONT_SEMIBOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_body),
            }),
        text(placeholder.message())
            .size(FONT_SIZE_BODY)
            .center()
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_muted),
            }),
    ]
    .spacing(SPACING_MD)
    .max_width(480.0)
    .align_x(iced::Alignment::Center);

    container(container(body).padding(SPACING_XL).style(card))
        .padding([SPACING_XL * 3.0, SPACING_LG])
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use bpguide_model::Icon;

    use super::*;
    use crate::message::Message;

    #[test]
    fn placeholder_builds_for_unknown_sections() {
        let placeholder = Placeholder {
            title: "",
            icon: Icon::GENERIC,
        };
        let element: Element<'_, Message> = view_placeholder(placeholder);
        drop(element);
    }
}
