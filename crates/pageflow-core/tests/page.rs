//! Tests for page binding and degradation on missing elements.

use pageflow_core::page::{
    CONTACT_FORM_ID, NAV_ID, NAV_LINKS_ID, NAV_TOGGLE_ID, NavLink, PageModel, SectionInfo,
    bind_page,
};
use pageflow_core::reveal::{RevealCandidate, RevealConfig};

fn full_model() -> PageModel {
    PageModel {
        element_ids: vec![
            NAV_ID.to_string(),
            NAV_TOGGLE_ID.to_string(),
            NAV_LINKS_ID.to_string(),
            CONTACT_FORM_ID.to_string(),
        ],
        links: vec![
            NavLink::new("Home", "#home"),
            NavLink::new("Contact", "#contact"),
        ],
        sections: vec![
            SectionInfo::new("home", 0.0),
            SectionInfo::new("contact", 2200.0),
        ],
        reveal_candidates: vec![
            RevealCandidate::new("home", 0.0),
            RevealCandidate::new("contact", 2200.0),
        ],
    }
}

#[test]
fn full_page_binds_every_controller() {
    let bound = bind_page(&full_model(), &RevealConfig::default(), 0.0, 760.0);

    assert!(bound.nav.is_some());
    assert!(bound.form.is_some());
    assert_eq!(bound.reveal.len(), 2);
    assert!(bound.reveal.is_revealed("home"), "eager evaluation ran");
}

#[test]
fn missing_toggle_skips_nav_only() {
    let mut model = full_model();
    model.element_ids.retain(|id| id != NAV_TOGGLE_ID);

    let bound = bind_page(&model, &RevealConfig::default(), 0.0, 760.0);

    assert!(bound.nav.is_none());
    assert!(bound.form.is_some(), "other controllers unaffected");
}

#[test]
fn missing_form_skips_form_only() {
    let mut model = full_model();
    model.element_ids.retain(|id| id != CONTACT_FORM_ID);

    let bound = bind_page(&model, &RevealConfig::default(), 0.0, 760.0);

    assert!(bound.nav.is_some());
    assert!(bound.form.is_none());
}

#[test]
fn empty_page_binds_nothing_and_does_not_panic() {
    let bound = bind_page(&PageModel::default(), &RevealConfig::default(), 0.0, 760.0);

    assert!(bound.nav.is_none());
    assert!(bound.form.is_none());
    assert!(bound.reveal.is_empty());
}

#[test]
fn section_lookups() {
    let model = full_model();

    assert_eq!(model.section_ids(), vec!["home", "contact"]);
    assert_eq!(model.section_top("contact"), Some(2200.0));
    assert_eq!(model.section_top("missing"), None);
    assert!(model.has_element(NAV_ID));
    assert!(!model.has_element("sidebar"));
}
