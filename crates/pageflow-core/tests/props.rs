//! Property tests for the controller invariants.

use proptest::prelude::*;

use pageflow_core::nav::{NavConfig, NavState};
use pageflow_core::reveal::{RevealCandidate, RevealConfig, RevealSet};

proptest! {
    /// Compact iff offset > threshold, for any offset in any order.
    #[test]
    fn nav_compact_matches_threshold(offsets in proptest::collection::vec(0.0f32..2000.0, 1..50)) {
        let config = NavConfig::default();
        let mut nav = NavState::new();
        for offset in offsets {
            nav.on_scroll(offset, &config);
            prop_assert_eq!(nav.is_compact(), offset > config.compact_threshold);
        }
    }

    /// N toggles leave the menu open iff N is odd.
    #[test]
    fn toggle_parity(n in 0usize..64) {
        let mut nav = NavState::new();
        for _ in 0..n {
            nav.toggle_menu();
        }
        prop_assert_eq!(nav.is_menu_open(), n % 2 == 1);
    }

    /// A link activation closes the menu from any toggle parity.
    #[test]
    fn link_closes_from_any_parity(n in 0usize..64) {
        let mut nav = NavState::new();
        for _ in 0..n {
            nav.toggle_menu();
        }
        nav.link_activated();
        prop_assert!(!nav.is_menu_open());
    }

    /// Once revealed, a candidate stays revealed under any scroll sequence.
    #[test]
    fn reveal_monotonic_under_any_scrolling(
        tops in proptest::collection::vec(0.0f32..5000.0, 1..20),
        offsets in proptest::collection::vec(0.0f32..5000.0, 1..50),
    ) {
        let candidates: Vec<_> = tops
            .iter()
            .enumerate()
            .map(|(i, top)| RevealCandidate::new(format!("c{i}"), *top))
            .collect();
        let mut set = RevealSet::new(candidates, &RevealConfig::default(), 0.0, 760.0);

        let mut seen: Vec<String> = Vec::new();
        for offset in offsets {
            set.evaluate(offset, 760.0);
            for id in &seen {
                prop_assert!(set.is_revealed(id), "candidate {id} un-revealed");
            }
            for i in 0..set.len() {
                let id = format!("c{i}");
                if set.is_revealed(&id) && !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
    }
}
