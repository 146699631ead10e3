//! Message types for the Elm-style architecture.
//!
//! All user interactions and system events flow through [`Message`]; the
//! `update` function processes them to modify application state.

use iced::Size;
use iced::time::Instant;
use iced::widget::scrollable;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Message body.
    Body,
}

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Page scrolling
    // =========================================================================
    /// The page scrollable reported a new viewport.
    PageScrolled(scrollable::Viewport),

    /// Animation tick while a smooth-scroll tween is in flight.
    TweenTick(Instant),

    /// The window was resized; the cached viewport height must follow.
    WindowResized(Size),

    // =========================================================================
    // Navigation
    // =========================================================================
    /// The menu toggle control was activated.
    MenuToggled,

    /// A navigation link was activated; carries the link's href.
    LinkPressed(String),

    // =========================================================================
    // Contact form
    // =========================================================================
    /// A form field's content changed.
    FieldChanged(ContactField, String),

    /// The form was submitted.
    FormSubmitted,

    /// The reset delay for the given submission cycle elapsed.
    FormResetElapsed(u64),
}
