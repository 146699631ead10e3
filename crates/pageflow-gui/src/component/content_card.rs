//! Content card.
//!
//! A titled card used in the about and features rows. Reveal state is
//! expressed by fading every color to transparent while the candidate is
//! pending; the card occupies its layout slot either way, so positions
//! never shift when it appears.

use iced::widget::{column, container, text};
use iced::{Border, Element, Length};

use crate::message::Message;
use crate::theme::{
    BORDER_RADIUS_MD, HAIRLINE, INK, INK_SOFT, SPACING_MD, SPACING_SM, SURFACE, faded,
    reveal_alpha,
};

/// A titled content card that fades in when revealed.
pub fn content_card<'a>(title: &'a str, body: &'a str, revealed: bool) -> Element<'a, Message> {
    let alpha = reveal_alpha(revealed);

    let content = column![
        text(title).size(16).color(faded(INK, alpha)),
        text(body).size(14).color(faded(INK_SOFT, alpha)),
    ]
    .spacing(SPACING_SM);

    container(content)
        .width(Length::Fill)
        .padding(SPACING_MD)
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
