//! Reveal-on-scroll controller.
//!
//! A fixed set of candidates is resolved once at setup; each candidate moves
//! from pending to visible the first time its top edge enters the viewport
//! threshold, and never moves back. Evaluation recomputes every pending
//! candidate's position on each scroll event - linear in the candidate
//! count, which is fine for the dozens of elements a page carries.

use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunables for the reveal controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Viewport-relative margin: a candidate is revealed once its top edge
    /// rises above `viewport_height - threshold_offset`.
    pub threshold_offset: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold_offset: 80.0,
        }
    }
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// A page element scheduled for a one-time scroll-triggered reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealCandidate {
    /// Element identifier, used by views to look up reveal state.
    pub id: String,
    /// Top edge offset relative to the top of the document.
    pub top: f32,
}

impl RevealCandidate {
    /// Create a candidate from an id and a document-relative top offset.
    pub fn new(id: impl Into<String>, top: f32) -> Self {
        Self { id: id.into(), top }
    }
}

// =============================================================================
// REVEAL SET
// =============================================================================

/// The full candidate set with per-candidate reveal state.
#[derive(Debug, Clone)]
pub struct RevealSet {
    candidates: Vec<(RevealCandidate, bool)>,
    threshold_offset: f32,
}

impl RevealSet {
    /// Build the candidate set and eagerly evaluate it against the initial
    /// viewport, so above-the-fold candidates are visible without waiting
    /// for a first scroll event.
    pub fn new(
        candidates: Vec<RevealCandidate>,
        config: &RevealConfig,
        scroll_offset: f32,
        viewport_height: f32,
    ) -> Self {
        let mut set = Self {
            candidates: candidates.into_iter().map(|c| (c, false)).collect(),
            threshold_offset: config.threshold_offset,
        };
        set.evaluate(scroll_offset, viewport_height);
        set
    }

    /// An empty set; every lookup reports revealed so unmarked content is
    /// never hidden.
    pub fn empty() -> Self {
        Self {
            candidates: Vec::new(),
            threshold_offset: RevealConfig::default().threshold_offset,
        }
    }

    /// Re-evaluate all pending candidates against the current scroll
    /// position.
    ///
    /// A pending candidate becomes visible exactly when
    /// `top - scroll_offset < viewport_height - threshold_offset`.
    /// Monotonic: already-visible candidates are never reconsidered.
    /// Returns the ids revealed by this evaluation.
    pub fn evaluate(&mut self, scroll_offset: f32, viewport_height: f32) -> Vec<String> {
        let limit = viewport_height - self.threshold_offset;
        let mut newly = Vec::new();
        for (candidate, revealed) in &mut self.candidates {
            if !*revealed && candidate.top - scroll_offset < limit {
                *revealed = true;
                newly.push(candidate.id.clone());
            }
        }
        if !newly.is_empty() {
            tracing::debug!(count = newly.len(), "candidates revealed");
        }
        newly
    }

    /// Whether the given candidate has been revealed.
    ///
    /// Ids that were never registered report `true`: content outside the
    /// candidate set is always visible.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.candidates
            .iter()
            .find(|(c, _)| c.id == id)
            .is_none_or(|(_, revealed)| *revealed)
    }

    /// Number of registered candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the set has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of candidates still pending.
    pub fn pending_count(&self) -> usize {
        self.candidates.iter().filter(|(_, r)| !*r).count()
    }
}
