//! Pageflow Studio - GUI library.
//!
//! A desktop single-page "site shell": a navigation bar over a scrollable
//! page of content sections and a simulated contact form. All interaction
//! logic lives in `pageflow-core`; this crate binds it to an Iced 0.14
//! application using the Elm architecture.

pub mod app;
pub mod component;
pub mod layout;
pub mod message;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
