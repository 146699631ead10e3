//! Pageflow Studio - Desktop single-page site shell.
//!
//! A navigation bar, a scrollable page of content sections, and a simulated
//! contact form, with scroll-driven reveal and smooth anchor scrolling.
//!
//! Built with Iced 0.14 using the Elm architecture (State, Message, Update,
//! View).

use iced::{Size, window};

use pageflow_gui::app::App;
use pageflow_gui::layout::metrics;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Pageflow Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(metrics::WINDOW_WIDTH, metrics::WINDOW_HEIGHT),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .run()
}
