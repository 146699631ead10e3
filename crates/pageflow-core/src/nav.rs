//! Navigation bar controller.
//!
//! Tracks two independent flags: whether the bar is rendered in its compact
//! form (driven by the vertical scroll offset) and whether the menu panel is
//! open (driven by explicit toggle/link activations). The toggle control's
//! "active" visual and the panel's "open" visual are both rendered from
//! [`NavState::is_menu_open`], so the two can never diverge.

use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunables for the navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset above which the bar switches to its compact form.
    pub compact_threshold: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            compact_threshold: 60.0,
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Navigation bar state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    compact: bool,
    menu_open: bool,
}

impl NavState {
    /// Create a navigation state in its initial form: expanded bar, closed
    /// menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the bar is currently in its compact form.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Whether the menu panel is currently open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Process a scroll event.
    ///
    /// The bar is compact exactly when the offset exceeds the configured
    /// threshold. Idempotent: repeated events at the same offset are
    /// side-effect free. Returns whether the compact flag changed.
    pub fn on_scroll(&mut self, offset: f32, config: &NavConfig) -> bool {
        let compact = offset > config.compact_threshold;
        if compact == self.compact {
            return false;
        }
        self.compact = compact;
        tracing::debug!(compact, offset, "nav bar form changed");
        true
    }

    /// Invert the menu open/closed state.
    ///
    /// Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "nav menu toggled");
        self.menu_open
    }

    /// Force the menu closed, regardless of its current state.
    ///
    /// Invoked when any navigation link is activated. Not a toggle: N
    /// activations in a row all leave the menu closed.
    pub fn link_activated(&mut self) {
        if self.menu_open {
            tracing::debug!("nav menu closed by link activation");
        }
        self.menu_open = false;
    }
}
