//! Contact form.

use bpguide_model::{ContactField, Icon, SubmitOutcome};
use iced::widget::{Column, button, column, container, row, space, text};
use iced::{Element, Length};

use crate::component::{form_field, icon};
use crate::message::{ContactMessage, Message};
use crate::state::AppState;
use crate::theme::style::{button_ghost, button_primary, card, notice};
use crate::theme::{
    FONT_SEMIBOLD, FONT_SIZE_BODY, FONT_SIZE_SMALL, FORM_MAX_WIDTH, ICON_SIZE_MD, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XL,
};

/// The form card. Name and email share a row when the window is wide.
pub fn view_contact(state: &AppState) -> Element<'_, Message> {
    let field = |field| field_input(state, field);

    let identity: Element<'_, Message> = if state.is_narrow() {
        column![field(ContactField::Name), field(ContactField::Email)]
            .spacing(SPACING_LG)
            .into()
    } else {
        row![field(ContactField::Name), field(ContactField::Email)]
            .spacing(SPACING_LG)
            .into()
    };

    let send = button(
        row![
            icon(Icon::Send).size(ICON_SIZE_MD),
            text("Send Message").size(FONT_SIZE_BODY).font(FONT_SEMIBOLD),
        ]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center),
    )
    .on_press(Message::Contact(ContactMessage::Submit))
    .padding([SPACING_MD, SPACING_XL])
    .style(button_primary);

    let mut form = Column::new()
        .push(identity)
        .push(field(ContactField::Subject))
        .push(field(ContactField::Message))
        .push(send)
        .spacing(SPACING_LG);

    if let Some(outcome) = &state.contact_outcome {
        form = form.push(view_notice(outcome));
    }

    container(
        container(form)
            .padding(SPACING_XL)
            .width(Length::Fill)
            .style(card),
    )
    .max_width(FORM_MAX_WIDTH)
    .into()
}

fn field_input(state: &AppState, field: ContactField) -> Element<'_, Message> {
    form_field(
        field.label(),
        state.contact.get(field),
        move |value| Message::Contact(ContactMessage::FieldChanged(field, value)),
        field_error(state.contact_outcome.as_ref(), field),
        field.is_multiline(),
    )
}

/// Error text for `field` from the last rejected submit.
fn field_error(outcome: Option<&SubmitOutcome>, field: ContactField) -> Option<String> {
    match outcome? {
        SubmitOutcome::Invalid(issues) => issues
            .iter()
            .find(|issue| issue.field() == field)
            .map(ToString::to_string),
        SubmitOutcome::NoEndpoint => None,
    }
}

fn view_notice(outcome: &SubmitOutcome) -> Element<'static, Message> {
    let is_error = matches!(outcome, SubmitOutcome::Invalid(_));
    container(
        row![
            text(outcome.summary()).size(FONT_SIZE_SMALL),
            space::horizontal(),
            button(text("Dismiss").size(FONT_SIZE_SMALL))
                .on_press(Message::Contact(ContactMessage::DismissNotice))
                .padding([SPACING_SM / 2.0, SPACING_SM])
                .style(button_ghost),
        ]
        .spacing(SPACING_MD)
        .align_y(iced::Alignment::Center),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(notice(is_error))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpguide_model::ContactForm;

    #[test]
    fn errors_attach_to_their_field() {
        let outcome = ContactForm::default().submit();
        assert_eq!(
            field_error(Some(&outcome), ContactField::Name).as_deref(),
            Some("Name is required")
        );
        assert_eq!(field_error(Some(&outcome), ContactField::Subject), None);
        assert_eq!(field_error(None, ContactField::Name), None);
    }

    #[test]
    fn no_endpoint_has_no_field_errors() {
        for field in ContactField::ALL {
            assert_eq!(field_error(Some(&SubmitOutcome::NoEndpoint), field), None);
        }
    }
}
