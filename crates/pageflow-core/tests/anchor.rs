//! Tests for anchor resolution and the scroll tween.

use std::time::Duration;

use pageflow_core::anchor::{AnchorAction, ScrollTween, TweenConfig, resolve_anchor};

const SECTIONS: &[&str] = &["home", "about", "section2", "contact"];

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn bare_fragment_is_ignored() {
    assert_eq!(resolve_anchor("#", SECTIONS), AnchorAction::Ignore);
}

#[test]
fn known_fragment_scrolls() {
    assert_eq!(
        resolve_anchor("#section2", SECTIONS),
        AnchorAction::ScrollTo("section2".to_string())
    );
}

#[test]
fn unknown_fragment_falls_back_to_native() {
    assert_eq!(resolve_anchor("#missing", SECTIONS), AnchorAction::Native);
}

#[test]
fn non_fragment_href_is_native() {
    assert_eq!(
        resolve_anchor("https://example.com/docs", SECTIONS),
        AnchorAction::Native
    );
    assert_eq!(resolve_anchor("", SECTIONS), AnchorAction::Native);
}

// =========================================================================
// Tween
// =========================================================================

#[test]
fn tween_starts_at_origin_and_settles_at_target() {
    let config = TweenConfig { duration_ms: 400 };
    let mut tween = ScrollTween::new(100.0, 900.0, &config);

    assert_eq!(tween.position(), 100.0);
    assert!(!tween.is_finished());

    tween.advance(Duration::from_millis(400));
    assert!(tween.is_finished());
    assert_eq!(tween.position(), 900.0);

    // Overshoot pins to the target.
    tween.advance(Duration::from_millis(100));
    assert_eq!(tween.position(), 900.0);
}

#[test]
fn tween_eases_out() {
    let config = TweenConfig { duration_ms: 400 };
    let mut tween = ScrollTween::new(0.0, 1000.0, &config);

    let halfway = tween.advance(Duration::from_millis(200));
    // Ease-out covers more than half the distance in the first half.
    assert!(halfway > 500.0);
    assert!(halfway < 1000.0);
}

#[test]
fn tween_is_monotonic_toward_target() {
    let config = TweenConfig::default();
    let mut tween = ScrollTween::new(0.0, 640.0, &config);

    let mut last = tween.position();
    for _ in 0..60 {
        let next = tween.advance(Duration::from_millis(8));
        assert!(next >= last);
        last = next;
    }
}

#[test]
fn zero_duration_config_still_terminates() {
    let config = TweenConfig { duration_ms: 0 };
    let mut tween = ScrollTween::new(0.0, 50.0, &config);
    tween.advance(Duration::from_millis(1));
    assert!(tween.is_finished());
    assert_eq!(tween.position(), 50.0);
}
