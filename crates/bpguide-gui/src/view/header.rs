//! Fixed header with the menu toggle and the guide title.

use bpguide_model::{GUIDE_TITLE, Icon};
use iced::gradient::Linear;
use iced::widget::{button, container, row, text};
use iced::{Background, Border, Color, Degrees, Element, Length, Theme};

use crate::component::{icon, icon_close, icon_menu};
use crate::message::{Message, NavigationMessage};
use crate::state::AppState;
use crate::theme::style::{button_ghost, header};
use crate::theme::{
    BORDER_RADIUS_MD, FONT_BOLD, FONT_SIZE_TITLE, GuideColors, HEADER_HEIGHT, ICON_SIZE_LG,
    SPACING_LG, SPACING_MD, SPACING_SM,
};

/// Header bar. The menu button only exists below the sidebar breakpoint
/// and shows a close glyph while the sidebar is open.
pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let mut bar = row![].spacing(SPACING_MD).align_y(iced::Alignment::Center);

    if state.is_narrow() {
        let glyph = if state.guide.navigation.sidebar_open() {
            icon_close()
        } else {
            icon_menu()
        };
        bar = bar.push(
            button(glyph.size(ICON_SIZE_LG))
                .on_press(Message::Navigation(NavigationMessage::ToggleSidebar))
                .padding(SPACING_SM)
                .style(button_ghost),
        );
    }

    let logo = container(icon(Icon::BookOpen).size(ICON_SIZE_LG).color(Color::WHITE))
        .center(40.0)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Gradient(
                Linear::new(Degrees(135.0))
                    .add_stop(0.0, Color::from_rgb8(0x25, 0x63, 0xeb))
                    .add_stop(1.0, Color::from_rgb8(0x93, 0x33, 0xea))
                    .into(),
            )),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    bar = bar.push(logo).push(
        text(GUIDE_TITLE)
            .size(FONT_SIZE_TITLE)
            .font(FONT_BOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_strong),
            }),
    );

    container(bar)
        .padding([0.0, SPACING_LG])
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_y(iced::alignment::Vertical::Center)
        .style(header(state.guide.scroll.is_scrolled()))
        .into()
}
