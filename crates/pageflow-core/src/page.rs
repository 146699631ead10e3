//! Page model and controller binding.
//!
//! Consumers describe their page once - which well-known elements exist,
//! the navigation links, and the sections with their document-relative top
//! offsets - and [`bind_page`] resolves and validates everything up front.
//! Each controller attaches only if its required elements are present; a
//! missing element skips that controller with a warning and leaves the
//! others untouched. Nothing ever panics over an absent element.

use crate::error::BindError;
use crate::form::FormMachine;
use crate::nav::NavState;
use crate::reveal::{RevealCandidate, RevealConfig, RevealSet};

// =============================================================================
// WELL-KNOWN ELEMENT IDS
// =============================================================================

/// The navigation bar.
pub const NAV_ID: &str = "nav";
/// The menu toggle control.
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
/// The container holding the navigation links.
pub const NAV_LINKS_ID: &str = "nav-links";
/// The contact form.
pub const CONTACT_FORM_ID: &str = "contact-form";

// =============================================================================
// PAGE MODEL
// =============================================================================

/// A navigation link as authored on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    /// Text shown to the user.
    pub label: String,
    /// Target reference; fragment hrefs (`#id`) are candidates for smooth
    /// scrolling.
    pub href: String,
}

impl NavLink {
    /// Create a link from a label and an href.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A page section that can serve as an anchor target.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionInfo {
    /// Section identifier (the fragment anchors refer to).
    pub id: String,
    /// Top edge offset relative to the top of the document.
    pub top: f32,
}

impl SectionInfo {
    /// Create a section record.
    pub fn new(id: impl Into<String>, top: f32) -> Self {
        Self { id: id.into(), top }
    }
}

/// Declarative description of the page the controllers attach to.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    /// Ids of the well-known elements actually present on the page.
    pub element_ids: Vec<String>,
    /// Navigation links, in display order.
    pub links: Vec<NavLink>,
    /// Anchor-target sections, in document order.
    pub sections: Vec<SectionInfo>,
    /// Reveal candidates, in document order.
    pub reveal_candidates: Vec<RevealCandidate>,
}

impl PageModel {
    /// Whether the page carries the given well-known element.
    pub fn has_element(&self, id: &str) -> bool {
        self.element_ids.iter().any(|e| e == id)
    }

    /// Section ids, for anchor resolution.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    /// Document-relative top offset of a section, if it exists.
    pub fn section_top(&self, id: &str) -> Option<f32> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }
}

// =============================================================================
// BINDING
// =============================================================================

/// Controllers that successfully attached to the page.
#[derive(Debug, Clone)]
pub struct BoundPage {
    /// Navigation controller; `None` if the bar, toggle, or links container
    /// was missing.
    pub nav: Option<NavState>,
    /// Reveal controller; empty if the page registered no candidates.
    pub reveal: RevealSet,
    /// Submission machine; `None` if the page has no contact form.
    pub form: Option<FormMachine>,
}

/// Resolve and validate the page, attaching every controller whose
/// requirements are met.
///
/// The reveal set is evaluated eagerly against the initial viewport, so
/// above-the-fold candidates are visible before any scroll event arrives.
pub fn bind_page(
    model: &PageModel,
    reveal_config: &RevealConfig,
    scroll_offset: f32,
    viewport_height: f32,
) -> BoundPage {
    let nav = match bind_nav(model) {
        Ok(nav) => Some(nav),
        Err(err) => {
            tracing::warn!(%err, "navigation controller skipped");
            None
        }
    };

    let form = match bind_form(model) {
        Ok(form) => Some(form),
        Err(err) => {
            tracing::warn!(%err, "contact form controller skipped");
            None
        }
    };

    let reveal = RevealSet::new(
        model.reveal_candidates.clone(),
        reveal_config,
        scroll_offset,
        viewport_height,
    );

    BoundPage { nav, reveal, form }
}

/// Bind the navigation controller, requiring the bar, the toggle control,
/// and the links container. Each element is checked individually.
fn bind_nav(model: &PageModel) -> Result<NavState, BindError> {
    for id in [NAV_ID, NAV_TOGGLE_ID, NAV_LINKS_ID] {
        if !model.has_element(id) {
            return Err(BindError::missing(id));
        }
    }
    Ok(NavState::new())
}

/// Bind the submission machine, requiring the contact form.
fn bind_form(model: &PageModel) -> Result<FormMachine, BindError> {
    if !model.has_element(CONTACT_FORM_ID) {
        return Err(BindError::missing(CONTACT_FORM_ID));
    }
    Ok(FormMachine::new())
}
