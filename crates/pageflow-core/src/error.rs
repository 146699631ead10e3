//! Controller setup errors.
//!
//! Binding failures are never fatal: a controller whose required elements
//! are absent is simply skipped, and the remaining controllers attach
//! normally. Anchor resolution failures are not errors at all; they are
//! ordinary [`AnchorAction`](crate::anchor::AnchorAction) outcomes that
//! fall back to default behavior.

use thiserror::Error;

/// Errors raised while binding controllers to a page model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindError {
    /// A required page element is absent at setup time.
    ///
    /// The affected controller must not attach; other controllers are
    /// unaffected.
    #[error("required page element missing: {id}")]
    MissingElement {
        /// Identifier of the element that could not be resolved.
        id: String,
    },
}

impl BindError {
    /// Create a missing-element error for the given id.
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
