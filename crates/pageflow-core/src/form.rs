//! Contact-form submission simulation.
//!
//! A cyclic machine: `Idle -> Sending -> Idle`, re-entered on every
//! submission. Nothing leaves the client; "sending" is purely visual
//! feedback on the submit control, reverted after a configured delay.
//!
//! Entering `Sending` captures the control's current label so the reset can
//! restore it verbatim. Each cycle carries a token; the delayed reset is
//! only honored if its token matches the live cycle, so a late timer from
//! an earlier cycle can never clobber a newer one. Submission while already
//! `Sending` is rejected - the UI disables the control, and this guard
//! covers programmatic double-submission as well.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunables for the submission cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Label shown on the submit control while in the sending phase.
    pub confirm_label: String,
    /// Delay before the control reverts to its idle appearance.
    pub reset_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            confirm_label: "Message Sent!".to_string(),
            reset_delay_ms: 2500,
        }
    }
}

// =============================================================================
// PHASES
// =============================================================================

/// Current phase of the submission cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Waiting for a submission.
    #[default]
    Idle,
    /// Showing sent feedback; the control is disabled and dimmed.
    Sending {
        /// Label the control carried when the cycle started.
        original_label: String,
    },
}

// =============================================================================
// MACHINE
// =============================================================================

/// Effects of entering the sending phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Label to display on the submit control.
    pub confirm_label: String,
    /// How long to wait before delivering the matching reset.
    pub reset_delay: Duration,
    /// Token identifying this cycle; pass it back to
    /// [`FormMachine::reset`].
    pub cycle: u64,
}

/// Effects of returning to idle: restore the label, re-enable the control,
/// restore full opacity, and clear every form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    /// Label captured at submission time, to be restored exactly.
    pub restored_label: String,
}

/// The submission state machine.
#[derive(Debug, Clone, Default)]
pub struct FormMachine {
    phase: FormPhase,
    cycle: u64,
}

impl FormMachine {
    /// Create an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Whether a cycle is in flight. The submit control is disabled and
    /// dimmed exactly while this holds.
    pub fn is_sending(&self) -> bool {
        matches!(self.phase, FormPhase::Sending { .. })
    }

    /// Begin a submission cycle.
    ///
    /// `current_label` is whatever the submit control displays right now; it
    /// is captured verbatim and restored by the matching reset. Returns
    /// `None` if a cycle is already in flight.
    pub fn submit(&mut self, current_label: &str, config: &FormConfig) -> Option<SubmitOutcome> {
        if self.is_sending() {
            tracing::debug!("submission ignored: cycle already in flight");
            return None;
        }
        self.cycle += 1;
        self.phase = FormPhase::Sending {
            original_label: current_label.to_string(),
        };
        tracing::debug!(cycle = self.cycle, "form submission cycle started");
        Some(SubmitOutcome {
            confirm_label: config.confirm_label.clone(),
            reset_delay: Duration::from_millis(config.reset_delay_ms),
            cycle: self.cycle,
        })
    }

    /// Complete the cycle identified by `cycle`.
    ///
    /// Returns `None` when the token is stale (a newer cycle has started)
    /// or the machine is already idle; the caller drops the timer silently.
    pub fn reset(&mut self, cycle: u64) -> Option<ResetOutcome> {
        if cycle != self.cycle {
            tracing::debug!(cycle, live = self.cycle, "stale reset ignored");
            return None;
        }
        match std::mem::take(&mut self.phase) {
            FormPhase::Idle => None,
            FormPhase::Sending { original_label } => {
                tracing::debug!(cycle, "form submission cycle completed");
                Some(ResetOutcome {
                    restored_label: original_label,
                })
            }
        }
    }
}
