//! Page view.
//!
//! A pure function of [`AppState`]: the scrollable section stack, the nav
//! bar layered over it, and the menu panel when open. Section heights come
//! from [`layout::metrics`] so the rendered page matches the offsets the
//! controllers were bound with.

use iced::widget::{Space, button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Border, Element, Length};

use crate::component::{contact_form, content_card, menu_panel, nav_bar};
use crate::layout::{PAGE_SCROLLABLE, candidate, metrics, section};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    ACCENT, ACCENT_HOVER, BORDER_RADIUS_SM, INK, INK_SOFT, ON_SLATE, PAPER, SLATE, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XXL, faded, reveal_alpha,
};

/// Render the whole page.
pub fn view_page(state: &AppState) -> Element<'_, Message> {
    let page = scrollable(column![
        hero(state),
        about(state),
        features(state),
        contact(state),
    ])
    .id(PAGE_SCROLLABLE)
    .on_scroll(Message::PageScrolled)
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers: Vec<Element<'_, Message>> = vec![page.into(), nav_bar(state)];
    if state.menu_open() {
        layers.push(menu_panel(state));
    }

    stack(layers).width(Length::Fill).height(Length::Fill).into()
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Hero section - always above the fold.
fn hero(_state: &AppState) -> Element<'_, Message> {
    let copy = column![
        text("SCROLL CHOREOGRAPHY, NO BROWSER").size(13).color(faded(ON_SLATE, 0.7)),
        text("Pages that move with the reader").size(40).color(ON_SLATE),
        text(
            "A compacting navigation bar, content that reveals itself as it \
             enters the viewport, and anchors that glide instead of jump - \
             the familiar single-page repertoire, driven by testable state \
             machines."
        )
        .size(17)
        .color(faded(ON_SLATE, 0.85)),
        Space::new().height(SPACING_MD),
        button(text("Get in touch").size(15).color(ON_SLATE))
            .on_press(Message::LinkPressed(format!("#{}", section::CONTACT)))
            .padding([SPACING_SM, SPACING_MD * 2.0])
            .style(|_theme, status| {
                let base = match status {
                    button::Status::Hovered | button::Status::Pressed => ACCENT_HOVER,
                    _ => ACCENT,
                };
                button::Style {
                    background: Some(base.into()),
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                }
            }),
    ]
    .spacing(SPACING_MD)
    .max_width(760.0);

    section_shell(metrics::HERO_HEIGHT, SLATE, copy.into())
}

/// About section.
fn about(state: &AppState) -> Element<'_, Message> {
    let heading_alpha = reveal_alpha(state.reveal.is_revealed(candidate::ABOUT_HEADING));

    let cards = row![
        content_card(
            "One page, four behaviors",
            "Navigation compaction, reveal-on-scroll, smooth anchors, and a \
             simulated contact form - each an independent controller with no \
             shared state beyond the page itself.",
            state.reveal.is_revealed(candidate::ABOUT_CARDS[0]),
        ),
        content_card(
            "State first, pixels second",
            "Every behavior is a plain state object with transition \
             functions. The widgets just render what the state says.",
            state.reveal.is_revealed(candidate::ABOUT_CARDS[1]),
        ),
        content_card(
            "Degrades, never breaks",
            "A controller whose elements are missing simply skips setup. \
             Unresolved anchors fall back to default behavior.",
            state.reveal.is_revealed(candidate::ABOUT_CARDS[2]),
        ),
    ]
    .spacing(SPACING_LG);

    let body = column![
        text("About").size(28).color(faded(INK, heading_alpha)),
        text("What this shell demonstrates")
            .size(16)
            .color(faded(INK_SOFT, heading_alpha)),
        Space::new().height(SPACING_XL),
        cards,
    ]
    .spacing(SPACING_SM)
    .max_width(1040.0);

    section_shell(metrics::ABOUT_HEIGHT, PAPER, body.into())
}

/// Features section.
fn features(state: &AppState) -> Element<'_, Message> {
    let heading_alpha = reveal_alpha(state.reveal.is_revealed(candidate::FEATURES_HEADING));

    let cards = row![
        content_card(
            "Monotonic reveals",
            "Once content has entered the viewport threshold it stays \
             visible - scrolling back up never hides it again.",
            state.reveal.is_revealed(candidate::FEATURE_CARDS[0]),
        ),
        content_card(
            "Eager first pass",
            "Above-the-fold content is revealed at startup, before the \
             first scroll event - no blank page waiting for input.",
            state.reveal.is_revealed(candidate::FEATURE_CARDS[1]),
        ),
        content_card(
            "Tuned in one file",
            "Thresholds, delays, labels, and tween duration all live in a \
             settings file, not in the code.",
            state.reveal.is_revealed(candidate::FEATURE_CARDS[2]),
        ),
    ]
    .spacing(SPACING_LG);

    let body = column![
        text("Features").size(28).color(faded(INK, heading_alpha)),
        text("The details that make it feel right")
            .size(16)
            .color(faded(INK_SOFT, heading_alpha)),
        Space::new().height(SPACING_XL),
        cards,
    ]
    .spacing(SPACING_SM)
    .max_width(1040.0);

    section_shell(metrics::FEATURES_HEIGHT, PAPER, body.into())
}

/// Contact section.
fn contact(state: &AppState) -> Element<'_, Message> {
    let copy_alpha = reveal_alpha(state.reveal.is_revealed(candidate::CONTACT_COPY));
    let form_revealed = state.reveal.is_revealed(candidate::CONTACT_FORM);

    let body = column![
        text("Contact").size(28).color(faded(INK, copy_alpha)),
        text(
            "Submissions are simulated end to end: the button confirms, \
             disables, dims, and comes back - nothing ever leaves this \
             window."
        )
        .size(16)
        .color(faded(INK_SOFT, copy_alpha)),
        Space::new().height(SPACING_XL),
        contact_form(state, form_revealed),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center);

    section_shell(metrics::CONTACT_HEIGHT, PAPER, body.into())
}

// =============================================================================
// SHELL
// =============================================================================

/// Fixed-height section container with centered content.
///
/// Heights are load-bearing: they are the same constants the reveal
/// candidates and anchor targets were computed from.
fn section_shell(
    height: f32,
    background: iced::Color,
    content: Element<'_, Message>,
) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(height)
        .center_x(Length::Fill)
        .center_y(height)
        .padding([SPACING_XXL, SPACING_XL])
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..container::Style::default()
        })
        .into()
}
