//! Contact form.
//!
//! The submit control renders whatever label `AppState` currently holds,
//! which is how the sending feedback and the exact restoration both fall
//! out of the state machine. While a cycle is in flight the inputs lose
//! their `on_input` handlers (Iced's disabled form) and the submit control
//! loses its `on_press` and drops to the sending opacity.

use iced::widget::{TextInput, button, column, container, text, text_input};
use iced::{Border, Element};

use crate::message::{ContactField, Message};
use crate::state::AppState;
use crate::theme::{
    ACCENT, ACCENT_HOVER, BORDER_RADIUS_MD, BORDER_RADIUS_SM, HAIRLINE, ON_SLATE, SENDING_OPACITY,
    SPACING_MD, SPACING_SM, SURFACE, faded, reveal_alpha,
};

/// The contact form card, fading in with its reveal candidate.
pub fn contact_form(state: &AppState, revealed: bool) -> Element<'_, Message> {
    let alpha = reveal_alpha(revealed);
    let sending = state.is_sending();

    let submit_opacity = if sending { SENDING_OPACITY } else { 1.0 };
    let submit = button(
        text(state.submit_label.clone())
            .size(15)
            .color(faded(ON_SLATE, alpha)),
    )
    .on_press_maybe((!sending).then_some(Message::FormSubmitted))
    .padding([SPACING_SM, SPACING_MD * 2.0])
    .style(move |_theme, status| {
        let base = match status {
            button::Status::Hovered | button::Status::Pressed => ACCENT_HOVER,
            _ => ACCENT,
        };
        button::Style {
            background: Some(faded(base, alpha * submit_opacity).into()),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    });

    let form = column![
        field("Your name", &state.fields.name, ContactField::Name, sending),
        field(
            "Email address",
            &state.fields.email,
            ContactField::Email,
            sending
        ),
        field(
            "What's on your mind?",
            &state.fields.body,
            ContactField::Body,
            sending
        ),
        submit,
    ]
    .spacing(SPACING_MD);

    container(form)
        .width(520.0)
        .padding(SPACING_MD * 1.5)
        .style(move |_| container::Style {
            background: Some(faded(SURFACE, alpha).into()),
            border: Border {
                color: faded(HAIRLINE, alpha),
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn field<'a>(
    placeholder: &'a str,
    value: &'a str,
    target: ContactField,
    sending: bool,
) -> TextInput<'a, Message> {
    let mut input = text_input(placeholder, value).padding(12).size(15);
    if !sending {
        input = input.on_input(move |value| Message::FieldChanged(target, value));
    }
    input
}
