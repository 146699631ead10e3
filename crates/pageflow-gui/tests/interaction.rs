//! Interaction tests over `AppState` - no Iced runtime required.

use std::time::Duration;

use pageflow_gui::layout::{candidate, metrics, section, section_top};
use pageflow_gui::message::ContactField;
use pageflow_gui::settings::Settings;
use pageflow_gui::state::AppState;

fn state() -> AppState {
    AppState::new(Settings::default())
}

// =========================================================================
// Nav + reveal on scroll
// =========================================================================

#[test]
fn scrolling_past_threshold_compacts_nav() {
    let mut state = state();
    assert!(!state.nav_compact());

    state.page_scrolled(120.0, metrics::WINDOW_HEIGHT);
    assert!(state.nav_compact());

    state.page_scrolled(0.0, metrics::WINDOW_HEIGHT);
    assert!(!state.nav_compact());
}

#[test]
fn above_the_fold_is_revealed_before_any_scroll() {
    let state = state();
    // Candidates below the fold stay pending at startup.
    assert!(!state.reveal.is_revealed(candidate::ABOUT_HEADING));
    assert!(state.reveal.pending_count() > 0);
}

#[test]
fn scrolling_reveals_sections_permanently() {
    let mut state = state();

    state.page_scrolled(section_top(section::CONTACT), metrics::WINDOW_HEIGHT);
    assert!(state.reveal.is_revealed(candidate::ABOUT_HEADING));
    assert!(state.reveal.is_revealed(candidate::CONTACT_FORM));

    state.page_scrolled(0.0, metrics::WINDOW_HEIGHT);
    assert!(state.reveal.is_revealed(candidate::CONTACT_FORM));
}

#[test]
fn resize_reevaluates_reveals() {
    let mut state = state();
    assert!(!state.reveal.is_revealed(candidate::ABOUT_HEADING));

    // A much taller viewport brings the about heading into the threshold.
    state.window_resized(metrics::HERO_HEIGHT + metrics::HEADING_INSET + 200.0);
    assert!(state.reveal.is_revealed(candidate::ABOUT_HEADING));
}

// =========================================================================
// Menu + smooth scroll
// =========================================================================

#[test]
fn link_press_closes_menu_and_starts_tween() {
    let mut state = state();

    state.menu_toggled();
    assert!(state.menu_open());

    let target = state
        .link_pressed("#about")
        .expect("known anchor starts a tween");
    assert_eq!(target, section_top(section::ABOUT));
    assert!(!state.menu_open());
    assert!(state.tween.is_some());
}

#[test]
fn bare_and_unknown_fragments_start_no_tween() {
    let mut state = state();

    assert!(state.link_pressed("#").is_none());
    assert!(state.link_pressed("#no-such-section").is_none());
    assert!(state.link_pressed("https://example.com").is_none());
    assert!(state.tween.is_none());
}

#[test]
fn tween_ticks_toward_target_and_finishes() {
    let mut state = state();
    let target = state.link_pressed("#features").expect("tween");

    let mut last = 0.0;
    let mut final_pos = 0.0;
    while let Some(pos) = state.tween_tick(Duration::from_millis(40)) {
        assert!(pos >= last, "tween must move monotonically downward");
        last = pos;
        final_pos = pos;
    }
    assert_eq!(final_pos, target);
    assert!(state.tween.is_none());
}

#[test]
fn tween_target_is_clamped_to_page_end() {
    let mut state = state();
    let target = state.link_pressed("#contact").expect("tween");
    assert!(target <= state.max_scroll_offset());
}

// =========================================================================
// Contact form
// =========================================================================

#[test]
fn submit_cycle_swaps_and_restores_label_and_clears_fields() {
    let mut state = state();
    state.field_changed(ContactField::Name, "Ada".to_string());
    state.field_changed(ContactField::Body, "Hello there".to_string());

    let outcome = state.form_submitted().expect("fresh cycle");
    assert_eq!(state.submit_label, "Message Sent!");
    assert!(state.is_sending());
    assert_eq!(outcome.reset_delay, Duration::from_millis(2500));

    assert!(state.form_reset_elapsed(outcome.cycle));
    assert_eq!(state.submit_label, "Send Message");
    assert!(!state.is_sending());
    assert!(state.fields.name.is_empty());
    assert!(state.fields.body.is_empty());
}

#[test]
fn double_submission_is_rejected_while_sending() {
    let mut state = state();
    state.form_submitted().expect("first");
    assert!(state.form_submitted().is_none());
}

#[test]
fn stale_reset_does_not_disturb_live_cycle() {
    let mut state = state();
    let first = state.form_submitted().expect("first");
    assert!(state.form_reset_elapsed(first.cycle));

    let second = state.form_submitted().expect("second");
    assert!(!state.form_reset_elapsed(first.cycle));
    assert!(state.is_sending());
    assert!(state.form_reset_elapsed(second.cycle));
}

#[test]
fn field_edits_ignored_while_sending() {
    let mut state = state();
    state.field_changed(ContactField::Email, "a@b.c".to_string());
    state.form_submitted().expect("cycle");

    state.field_changed(ContactField::Email, "evil@edit".to_string());
    assert_eq!(state.fields.email, "a@b.c");
}
