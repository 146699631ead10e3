//! Smooth anchor scrolling.
//!
//! Two pieces: resolution of a link's href against the page's known section
//! ids, and a fixed-duration tween that the GUI advances on animation ticks
//! to glide the scroll position to the target instead of jumping.
//!
//! Resolution never fails: a bare fragment is ignored, and anything that
//! does not resolve falls back to default link behavior.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// =============================================================================
// RESOLUTION
// =============================================================================

/// Outcome of resolving an activated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Bare fragment (`"#"`): nothing to scroll to, swallow the activation.
    Ignore,
    /// Not a same-page anchor, or the fragment does not resolve to a known
    /// section: leave default behavior alone.
    Native,
    /// Fragment resolved; scroll so the target's top edge meets the top of
    /// the viewport.
    ScrollTo(String),
}

/// Resolve an href against the set of known section ids.
pub fn resolve_anchor(href: &str, known_ids: &[&str]) -> AnchorAction {
    let Some(fragment) = href.strip_prefix('#') else {
        return AnchorAction::Native;
    };
    if fragment.is_empty() {
        return AnchorAction::Ignore;
    }
    if known_ids.contains(&fragment) {
        AnchorAction::ScrollTo(fragment.to_string())
    } else {
        tracing::debug!(href, "anchor target not found, falling back to default");
        AnchorAction::Native
    }
}

// =============================================================================
// TWEEN
// =============================================================================

/// Tunables for the scroll tween.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Total animation duration in milliseconds.
    pub duration_ms: u64,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self { duration_ms: 420 }
    }
}

/// A fixed-duration ease-out scroll animation.
///
/// The tween is pure bookkeeping: callers advance it with elapsed wall time
/// and apply the sampled position to their scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl ScrollTween {
    /// Start a tween between two scroll offsets.
    pub fn new(from: f32, to: f32, config: &TweenConfig) -> Self {
        Self {
            from,
            to,
            duration: Duration::from_millis(config.duration_ms.max(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// The destination offset.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance by `dt` and return the new scroll offset.
    ///
    /// Once the duration is exhausted the tween pins to the target; callers
    /// check [`ScrollTween::is_finished`] to drop it.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.position()
    }

    /// The current scroll offset.
    pub fn position(&self) -> f32 {
        let t = (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Whether the tween has reached its target.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Ease-out cubic: fast start, gentle settle.
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
