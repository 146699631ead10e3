//! Main application module.
//!
//! Implements the Iced 0.14 application using the builder pattern. The
//! architecture follows the Elm pattern: State -> Message -> Update -> View.
//! `update` is a thin shim over [`AppState`]'s transition methods; the only
//! effects it produces are `scroll_to` tasks while a tween runs and the
//! delayed form-reset task.

use std::time::Duration;

use iced::time::Instant;
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Element, Subscription, Task, Theme, time, window};

use crate::layout::PAGE_SCROLLABLE;
use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;
use crate::view::view_page;

/// Tween tick interval (aim ~120 FPS).
const TWEEN_TICK: Duration = Duration::from_millis(8);

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
    /// Instant of the last tween tick, for frame-accurate advances.
    last_tick: Option<Instant>,
}

impl App {
    /// Create a new application instance.
    ///
    /// Loads settings (writing the default file on first run so the
    /// tunables are discoverable) and binds the page controllers.
    pub fn new() -> (Self, Task<Message>) {
        let settings_path = Settings::config_path();
        let settings = Settings::load_from(&settings_path);
        if !settings_path.exists() {
            match settings.save_to(&settings_path) {
                Ok(()) => tracing::info!(path = %settings_path.display(), "wrote default settings"),
                Err(err) => tracing::warn!(%err, "could not write default settings"),
            }
        }

        let app = Self {
            state: AppState::new(settings),
            last_tick: None,
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Page scrolling
            // =================================================================
            Message::PageScrolled(viewport) => {
                let offset = viewport.absolute_offset();
                self.state
                    .page_scrolled(offset.y, viewport.bounds().height);
                Task::none()
            }

            Message::TweenTick(now) => {
                let dt = self
                    .last_tick
                    .map_or(TWEEN_TICK, |last| now.duration_since(last));
                self.last_tick = Some(now);
                match self.state.tween_tick(dt) {
                    Some(position) => operation::scroll_to(
                        PAGE_SCROLLABLE,
                        AbsoluteOffset {
                            x: 0.0,
                            y: position,
                        },
                    ),
                    None => Task::none(),
                }
            }

            Message::WindowResized(size) => {
                self.state.window_resized(size.height);
                Task::none()
            }

            // =================================================================
            // Navigation
            // =================================================================
            Message::MenuToggled => {
                self.state.menu_toggled();
                Task::none()
            }

            Message::LinkPressed(href) => {
                self.last_tick = None;
                self.state.link_pressed(&href);
                Task::none()
            }

            // =================================================================
            // Contact form
            // =================================================================
            Message::FieldChanged(field, value) => {
                self.state.field_changed(field, value);
                Task::none()
            }

            Message::FormSubmitted => match self.state.form_submitted() {
                Some(outcome) => {
                    let cycle = outcome.cycle;
                    let delay = outcome.reset_delay;
                    Task::perform(tokio::time::sleep(delay), move |_| {
                        Message::FormResetElapsed(cycle)
                    })
                }
                None => Task::none(),
            },

            Message::FormResetElapsed(cycle) => {
                self.state.form_reset_elapsed(cycle);
                Task::none()
            }
        }
    }

    /// Render the page.
    pub fn view(&self) -> Element<'_, Message> {
        view_page(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        "Pageflow Studio".to_string()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Subscribe to runtime events.
    ///
    /// The tween tick subscription only exists while a tween is in flight,
    /// so the app is fully idle between animations.
    pub fn subscription(&self) -> Subscription<Message> {
        let tween_sub = if self.state.tween.is_some() {
            time::every(TWEEN_TICK).map(Message::TweenTick)
        } else {
            Subscription::none()
        };

        let resize_sub = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([tween_sub, resize_sub])
    }
}
