//! Navigation bar and menu panel.
//!
//! Both render from [`NavState`](pageflow_core::nav::NavState) via
//! `AppState`: the bar's compact form follows `nav_compact()`, and the
//! toggle glyph and the panel's visibility both follow `menu_open()`, so
//! the two can never disagree.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Vector};

use crate::layout::metrics;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    ACCENT, BORDER_RADIUS_MD, BORDER_RADIUS_SM, HAIRLINE, INK, ON_SLATE, SPACING_LG, SPACING_MD,
    SPACING_SM, SURFACE, faded,
};

// =============================================================================
// NAV BAR
// =============================================================================

/// The fixed navigation bar, rendered over the page.
pub fn nav_bar(state: &AppState) -> Element<'_, Message> {
    let compact = state.nav_compact();
    let menu_open = state.menu_open();

    let link_color = if compact { INK } else { ON_SLATE };

    let brand = row![
        text("Pageflow").size(19).color(ACCENT),
        text(" Studio").size(19).color(link_color),
    ]
    .align_y(Alignment::Center);

    let mut links = row![].spacing(SPACING_MD).align_y(Alignment::Center);
    for link in &state.model.links {
        links = links.push(
            button(text(link.label.clone()).size(14).color(link_color))
                .on_press(Message::LinkPressed(link.href.clone()))
                .padding([SPACING_SM, SPACING_MD])
                .style(ghost_button),
        );
    }

    let toggle_glyph = if menu_open { "✕" } else { "☰" };
    let toggle_color = if menu_open { ACCENT } else { link_color };
    let toggle = button(text(toggle_glyph).size(18).color(toggle_color))
        .on_press(Message::MenuToggled)
        .padding([SPACING_SM, SPACING_MD])
        .style(ghost_button);

    let height = if compact {
        metrics::NAV_HEIGHT_COMPACT
    } else {
        metrics::NAV_HEIGHT
    };

    let bar = row![brand, Space::new().width(Length::Fill), links, toggle]
        .align_y(Alignment::Center)
        .padding([0.0, SPACING_LG]);

    container(bar)
        .width(Length::Fill)
        .height(height)
        .center_y(height)
        .style(move |_| {
            if compact {
                container::Style {
                    background: Some(SURFACE.into()),
                    shadow: Shadow {
                        color: faded(Color::BLACK, 0.12),
                        offset: Vector::new(0.0, 1.0),
                        blur_radius: 6.0,
                    },
                    ..container::Style::default()
                }
            } else {
                container::Style::default()
            }
        })
        .into()
}

// =============================================================================
// MENU PANEL
// =============================================================================

/// The dropdown menu panel; render only while the menu is open.
pub fn menu_panel(state: &AppState) -> Element<'_, Message> {
    let mut entries = column![].spacing(SPACING_SM).width(Length::Fill);
    for link in &state.model.links {
        entries = entries.push(
            button(text(link.label.clone()).size(15).color(INK))
                .on_press(Message::LinkPressed(link.href.clone()))
                .padding([SPACING_SM, SPACING_MD])
                .width(Length::Fill)
                .style(ghost_button),
        );
    }

    let bar_height = if state.nav_compact() {
        metrics::NAV_HEIGHT_COMPACT
    } else {
        metrics::NAV_HEIGHT
    };

    let panel = container(entries)
        .width(260.0)
        .padding(SPACING_MD)
        .style(|_| container::Style {
            background: Some(SURFACE.into()),
            border: Border {
                color: HAIRLINE,
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            shadow: Shadow {
                color: faded(Color::BLACK, 0.18),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..container::Style::default()
        });

    column![
        Space::new().height(bar_height + SPACING_SM),
        row![Space::new().width(Length::Fill), panel].padding([0.0, SPACING_LG]),
    ]
    .into()
}

// =============================================================================
// STYLES
// =============================================================================

/// Text-like button: no chrome, subtle hover tint.
fn ghost_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(faded(ACCENT, 0.12).into()),
        _ => None,
    };
    // Link texts carry their own colors; only the hover tint lives here.
    button::Style {
        background,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
