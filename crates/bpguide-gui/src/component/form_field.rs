//! Labelled text input.

use iced::widget::{column, text, text_input};
use iced::{Element, Length, Theme};

use crate::theme::style::text_input_default;
use crate::theme::{FONT_SIZE_CAPTION, FONT_SIZE_SMALL, GuideColors, SPACING_XS, SPACING_SM};

/// Creates a form field with label and optional error message.
///
/// Multi-line fields get extra vertical padding; the input itself stays a
/// single line.
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<String>,
    tall: bool,
) -> Element<'a, M> {
    let label_text = text(label)
        .size(FONT_SIZE_SMALL)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.guide().text_body),
        });

    let input = text_input("", value)
        .on_input(on_change)
        .padding(if tall {
            [SPACING_SM * 6.0, 16.0]
        } else {
            [SPACING_SM, 16.0]
        })
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(err) = error {
        content = content.push(text(err).size(FONT_SIZE_CAPTION).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            }
        }));
    }

    content.width(Length::Fill).into()
}
