//! Page layout metrics and the page model.
//!
//! The page is a fixed vertical stack of sections, so every anchor target
//! and reveal candidate has a document-relative top offset known at
//! startup. Tuning happens here so the view, the reveal candidates, and the
//! anchor targets stay consistent.

use pageflow_core::page::{
    CONTACT_FORM_ID, NAV_ID, NAV_LINKS_ID, NAV_TOGGLE_ID, NavLink, PageModel, SectionInfo,
};
use pageflow_core::reveal::RevealCandidate;

/// Widget id of the page scrollable, shared by the view and the scroll
/// tasks issued while a tween runs.
pub const PAGE_SCROLLABLE: &str = "pageflow-page";

/// Layout constants for the page composition.
pub mod metrics {
    /// Initial window width.
    pub const WINDOW_WIDTH: f32 = 1180.0;
    /// Initial window height; also the viewport height assumed for the
    /// eager reveal pass before the first scroll event arrives.
    pub const WINDOW_HEIGHT: f32 = 760.0;

    /// Nav bar height in its expanded form.
    pub const NAV_HEIGHT: f32 = 72.0;
    /// Nav bar height once compacted by scrolling.
    pub const NAV_HEIGHT_COMPACT: f32 = 56.0;

    /// Hero section height.
    pub const HERO_HEIGHT: f32 = 640.0;
    /// About section height.
    pub const ABOUT_HEIGHT: f32 = 560.0;
    /// Features section height.
    pub const FEATURES_HEIGHT: f32 = 560.0;
    /// Contact section height.
    pub const CONTACT_HEIGHT: f32 = 720.0;

    /// Offset of a section's heading below the section top.
    pub const HEADING_INSET: f32 = 72.0;
    /// Offset of a section's card row below the section top.
    pub const CARDS_INSET: f32 = 200.0;
    /// Extra offset per card, staggering the reveal across a row.
    pub const CARD_STAGGER: f32 = 40.0;
    /// Offset of the contact form below the contact section top.
    pub const FORM_INSET: f32 = 280.0;

    /// Total scrollable content height.
    pub const PAGE_HEIGHT: f32 = HERO_HEIGHT + ABOUT_HEIGHT + FEATURES_HEIGHT + CONTACT_HEIGHT;
}

/// Section ids, used as anchor targets.
pub mod section {
    /// Hero section.
    pub const HOME: &str = "home";
    /// About section.
    pub const ABOUT: &str = "about";
    /// Features section.
    pub const FEATURES: &str = "features";
    /// Contact section.
    pub const CONTACT: &str = "contact";
}

/// Reveal candidate ids.
pub mod candidate {
    /// About section heading.
    pub const ABOUT_HEADING: &str = "about-heading";
    /// About cards, left to right.
    pub const ABOUT_CARDS: [&str; 3] = ["about-card-0", "about-card-1", "about-card-2"];
    /// Features section heading.
    pub const FEATURES_HEADING: &str = "features-heading";
    /// Feature cards, left to right.
    pub const FEATURE_CARDS: [&str; 3] = ["feature-card-0", "feature-card-1", "feature-card-2"];
    /// Contact heading and lead copy.
    pub const CONTACT_COPY: &str = "contact-copy";
    /// The contact form itself.
    pub const CONTACT_FORM: &str = "contact-form-reveal";
}

/// Document-relative top offset of each section.
pub fn section_top(id: &str) -> f32 {
    match id {
        section::ABOUT => metrics::HERO_HEIGHT,
        section::FEATURES => metrics::HERO_HEIGHT + metrics::ABOUT_HEIGHT,
        section::CONTACT => metrics::HERO_HEIGHT + metrics::ABOUT_HEIGHT + metrics::FEATURES_HEIGHT,
        _ => 0.0,
    }
}

/// Build the declarative page model the controllers bind to.
///
/// Everything the page carries is declared here: the well-known elements,
/// the nav links, the anchor-target sections, and the reveal candidates
/// with their document-relative tops.
pub fn page_model() -> PageModel {
    let about_top = section_top(section::ABOUT);
    let features_top = section_top(section::FEATURES);
    let contact_top = section_top(section::CONTACT);

    let mut reveal_candidates = vec![RevealCandidate::new(
        candidate::ABOUT_HEADING,
        about_top + metrics::HEADING_INSET,
    )];
    for (i, id) in candidate::ABOUT_CARDS.iter().enumerate() {
        reveal_candidates.push(RevealCandidate::new(
            *id,
            about_top + metrics::CARDS_INSET + i as f32 * metrics::CARD_STAGGER,
        ));
    }
    reveal_candidates.push(RevealCandidate::new(
        candidate::FEATURES_HEADING,
        features_top + metrics::HEADING_INSET,
    ));
    for (i, id) in candidate::FEATURE_CARDS.iter().enumerate() {
        reveal_candidates.push(RevealCandidate::new(
            *id,
            features_top + metrics::CARDS_INSET + i as f32 * metrics::CARD_STAGGER,
        ));
    }
    reveal_candidates.push(RevealCandidate::new(
        candidate::CONTACT_COPY,
        contact_top + metrics::HEADING_INSET,
    ));
    reveal_candidates.push(RevealCandidate::new(
        candidate::CONTACT_FORM,
        contact_top + metrics::FORM_INSET,
    ));

    PageModel {
        element_ids: vec![
            NAV_ID.to_string(),
            NAV_TOGGLE_ID.to_string(),
            NAV_LINKS_ID.to_string(),
            CONTACT_FORM_ID.to_string(),
        ],
        links: vec![
            NavLink::new("Home", "#home"),
            NavLink::new("About", "#about"),
            NavLink::new("Features", "#features"),
            NavLink::new("Contact", "#contact"),
        ],
        sections: vec![
            SectionInfo::new(section::HOME, section_top(section::HOME)),
            SectionInfo::new(section::ABOUT, about_top),
            SectionInfo::new(section::FEATURES, features_top),
            SectionInfo::new(section::CONTACT, contact_top),
        ],
        reveal_candidates,
    }
}
