//! Reusable page components.

pub mod contact_form;
pub mod content_card;
pub mod nav_bar;

pub use contact_form::contact_form;
pub use content_card::content_card;
pub use nav_bar::{menu_panel, nav_bar};
