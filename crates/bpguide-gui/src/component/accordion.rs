//! Single accordion item: a header button and a body shown when open.

use iced::widget::{button, column, container, row, space, text};
use iced::{Element, Length, Theme};

use super::icon::{icon_chevron_down, icon_chevron_up};
use crate::theme::style::{accordion_header, accordion_item};
use crate::theme::{FONT_SEMIBOLD, FONT_SIZE_BODY, GuideColors, ICON_SIZE_MD, SPACING_LG, SPACING_MD};

/// Creates an accordion item.
///
/// The caller owns the open/closed state; clicking the header emits
/// `on_toggle`.
pub fn accordion<'a, M: Clone + 'a>(
    title: &'a str,
    leading: iced::widget::Text<'a>,
    body: &'a str,
    is_open: bool,
    on_toggle: M,
) -> Element<'a, M> {
    let chevron = if is_open {
        icon_chevron_up()
    } else {
        icon_chevron_down()
    };

    let header = button(
        row![
            leading.size(ICON_SIZE_MD).style(|theme: &Theme| text::Style {
                color: Some(theme.guide().accent_text),
            }),
            text(title).size(FONT_SIZE_BODY).font(FONT_SEMIBOLD),
            space::horizontal(),
            chevron.size(ICON_SIZE_MD).style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_muted),
            }),
        ]
        .spacing(12.0)
        .align_y(iced::Alignment::Center),
    )
    .on_press(on_toggle)
    .padding([SPACING_MD, SPACING_LG])
    .width(Length::Fill)
    .style(accordion_header);

    let mut content = column![header];
    if is_open {
        content = content.push(
            container(text(body).size(FONT_SIZE_BODY).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.guide().text_body),
                }
            }))
            .padding(iced::Padding {
                top: 8.0,
                right: SPACING_LG,
                bottom: SPACING_LG,
                left: SPACING_LG,
            }),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(accordion_item)
        .into()
}
