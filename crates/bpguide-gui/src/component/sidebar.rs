//! Sidebar navigation grouped by category.

use bpguide_model::{Guide, NavigationState, SIDEBAR_CREDIT, Section};
use iced::widget::{button, column, container, rule, scrollable, text};
use iced::{Element, Length, Theme};

use super::icon::icon;
use crate::message::{Message, NavigationMessage};
use crate::theme::style::{nav_item, sidebar_panel};
use crate::theme::{
    FONT_SEMIBOLD, FONT_SIZE_CAPTION, FONT_SIZE_SMALL, GuideColors, ICON_SIZE_MD, SIDEBAR_WIDTH,
    SPACING_MD, SPACING_SM, SPACING_XS, swatch,
};

/// Creates the sidebar: every category in order with its sections, the
/// active one highlighted, and the credit line at the bottom.
///
/// Categories without sections still show their heading.
pub fn sidebar<'a>(guide: &Guide<'a>, navigation: &NavigationState) -> Element<'a, Message> {
    let mut groups = column![].spacing(SPACING_SM);

    for group in guide.navigation_groups() {
        let tone = swatch(group.category.tone.swatch());
        let heading = container(
            text(group.category.title)
                .size(FONT_SIZE_SMALL)
                .font(FONT_SEMIBOLD)
                .color(tone),
        )
        .padding([SPACING_SM, SPACING_SM]);

        let mut entries = column![].spacing(SPACING_XS);
        for section in group.sections {
            entries = entries.push(entry(section, navigation.is_active(section.id.as_str())));
        }

        groups = groups.push(column![heading, entries]);
    }

    let credit = container(
        text(SIDEBAR_CREDIT)
            .size(FONT_SIZE_CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_muted),
            }),
    )
    .padding(SPACING_MD)
    .center_x(Length::Fill);

    container(column![
        scrollable(container(groups).padding(SPACING_MD)).height(Length::Fill),
        rule::horizontal(1),
        credit,
    ])
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .style(sidebar_panel)
    .into()
}

fn entry<'a>(section: &'a Section, active: bool) -> Element<'a, Message> {
    let content = iced::widget::row![
        icon(section.icon).size(ICON_SIZE_MD),
        text(section.title).size(FONT_SIZE_SMALL).font(FONT_SEMIBOLD),
    ]
    .spacing(12.0)
    .align_y(iced::Alignment::Center);

    button(content)
        .on_press(Message::Navigation(NavigationMessage::SelectSection(
            section.id.clone(),
        )))
        .padding([10.0, 12.0])
        .width(Length::Fill)
        .style(nav_item(active))
        .into()
}
