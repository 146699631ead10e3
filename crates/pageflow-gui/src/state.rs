//! Application state.
//!
//! [`AppState`] owns the bound page controllers plus the few pieces of
//! widget-facing state the controllers do not: the contact field contents,
//! the submit control's current label, and the in-flight scroll tween. All
//! transitions are plain methods taking plain values, so the interaction
//! logic is testable without an Iced runtime; `App::update` is a thin shim
//! that maps Iced events onto these methods.

use std::time::Duration;

use pageflow_core::anchor::{AnchorAction, ScrollTween, resolve_anchor};
use pageflow_core::form::{FormMachine, SubmitOutcome};
use pageflow_core::nav::NavState;
use pageflow_core::page::{PageModel, bind_page};
use pageflow_core::reveal::RevealSet;

use crate::layout::{self, metrics};
use crate::message::ContactField;
use crate::settings::Settings;

/// Label the submit control carries while idle.
const SUBMIT_LABEL: &str = "Send Message";

// =============================================================================
// CONTACT FIELDS
// =============================================================================

/// Contents of the contact form fields.
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub body: String,
}

impl ContactFields {
    /// Clear every field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.body.clear();
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// All application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded settings.
    pub settings: Settings,
    /// The declarative page description the controllers bound to.
    pub model: PageModel,
    /// Navigation controller, if its elements were present.
    pub nav: Option<NavState>,
    /// Reveal controller.
    pub reveal: RevealSet,
    /// Contact form machine, if the form is present.
    pub form: Option<FormMachine>,
    /// Contact form field contents.
    pub fields: ContactFields,
    /// Current label on the submit control.
    pub submit_label: String,
    /// In-flight smooth-scroll tween, if any.
    pub tween: Option<ScrollTween>,
    /// Last reported vertical scroll offset.
    pub scroll_offset: f32,
    /// Last reported viewport height.
    pub viewport_height: f32,
}

impl AppState {
    /// Bind the controllers to the page and run the eager reveal pass
    /// against the initial window size.
    pub fn new(settings: Settings) -> Self {
        let model = layout::page_model();
        let bound = bind_page(&model, &settings.reveal, 0.0, metrics::WINDOW_HEIGHT);
        Self {
            settings,
            model,
            nav: bound.nav,
            reveal: bound.reveal,
            form: bound.form,
            fields: ContactFields::default(),
            submit_label: SUBMIT_LABEL.to_string(),
            tween: None,
            scroll_offset: 0.0,
            viewport_height: metrics::WINDOW_HEIGHT,
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Process a scroll event: drive nav compaction and reveal evaluation.
    pub fn page_scrolled(&mut self, offset: f32, viewport_height: f32) {
        self.scroll_offset = offset;
        self.viewport_height = viewport_height;
        if let Some(nav) = &mut self.nav {
            nav.on_scroll(offset, &self.settings.nav);
        }
        self.reveal.evaluate(offset, viewport_height);
    }

    /// The window resized: refresh the cached viewport height and re-check
    /// the reveal set against the larger (or smaller) viewport.
    pub fn window_resized(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.reveal.evaluate(self.scroll_offset, viewport_height);
    }

    /// Advance the in-flight tween by `dt`, returning the scroll offset to
    /// apply. Finished tweens are dropped.
    pub fn tween_tick(&mut self, dt: Duration) -> Option<f32> {
        let tween = self.tween.as_mut()?;
        let position = tween.advance(dt);
        if tween.is_finished() {
            self.tween = None;
        }
        Some(position)
    }

    /// Largest reachable scroll offset for the current viewport.
    pub fn max_scroll_offset(&self) -> f32 {
        (metrics::PAGE_HEIGHT - self.viewport_height).max(0.0)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The menu toggle control was activated.
    pub fn menu_toggled(&mut self) {
        if let Some(nav) = &mut self.nav {
            nav.toggle_menu();
        }
    }

    /// A navigation link was activated.
    ///
    /// Always force-closes the menu, then resolves the href: a known
    /// fragment starts a tween toward the target section, a bare fragment
    /// is swallowed, and anything else is left to default behavior (which,
    /// in this shell, is nothing). Returns the tween target offset when a
    /// scroll was started.
    pub fn link_pressed(&mut self, href: &str) -> Option<f32> {
        if let Some(nav) = &mut self.nav {
            nav.link_activated();
        }
        match resolve_anchor(href, &self.model.section_ids()) {
            AnchorAction::ScrollTo(id) => {
                let top = self.model.section_top(&id)?;
                let target = top.min(self.max_scroll_offset());
                self.tween = Some(ScrollTween::new(
                    self.scroll_offset,
                    target,
                    &self.settings.tween,
                ));
                Some(target)
            }
            AnchorAction::Ignore => None,
            AnchorAction::Native => {
                tracing::debug!(href, "link left to default behavior");
                None
            }
        }
    }

    /// Whether the nav bar is in its compact form.
    pub fn nav_compact(&self) -> bool {
        self.nav.is_some_and(|nav| nav.is_compact())
    }

    /// Whether the menu panel is open.
    pub fn menu_open(&self) -> bool {
        self.nav.is_some_and(|nav| nav.is_menu_open())
    }

    // =========================================================================
    // Contact form
    // =========================================================================

    /// Submit the contact form.
    ///
    /// On a fresh cycle the submit control's label switches to the
    /// configured confirmation; the caller schedules the delayed reset from
    /// the returned outcome. `None` when the form is absent or a cycle is
    /// already in flight.
    pub fn form_submitted(&mut self) -> Option<SubmitOutcome> {
        let form = self.form.as_mut()?;
        let outcome = form.submit(&self.submit_label, &self.settings.form)?;
        self.submit_label.clone_from(&outcome.confirm_label);
        Some(outcome)
    }

    /// The reset delay elapsed for the given cycle.
    ///
    /// A matching cycle restores the captured label and clears the fields;
    /// a stale cycle is dropped. Returns whether the reset was applied.
    pub fn form_reset_elapsed(&mut self, cycle: u64) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        match form.reset(cycle) {
            Some(reset) => {
                self.submit_label = reset.restored_label;
                self.fields.clear();
                true
            }
            None => false,
        }
    }

    /// A form field's content changed. Ignored while a cycle is in flight
    /// (the inputs are disabled, this guards programmatic edits too).
    pub fn field_changed(&mut self, field: ContactField, value: String) {
        if self.is_sending() {
            return;
        }
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Body => self.fields.body = value,
        }
    }

    /// Whether a submission cycle is in flight.
    pub fn is_sending(&self) -> bool {
        self.form.as_ref().is_some_and(FormMachine::is_sending)
    }
}
