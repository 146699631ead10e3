//! Pageflow Studio - page interaction controllers.
//!
//! Pure controller logic for the four page behaviors: navigation bar
//! compaction and menu toggling, reveal-on-scroll, smooth anchor scrolling,
//! and the simulated contact-form submission cycle.
//!
//! Every controller is an explicit state object exposing transition
//! functions. Nothing here depends on a windowing toolkit, so all decision
//! logic is testable without a running UI. The GUI crate maps its events
//! (scroll viewports, button presses, timers) onto these transitions and
//! renders from the resulting state.

pub mod anchor;
pub mod error;
pub mod form;
pub mod nav;
pub mod page;
pub mod reveal;

pub use anchor::{AnchorAction, ScrollTween, TweenConfig, resolve_anchor};
pub use error::BindError;
pub use form::{FormConfig, FormMachine, FormPhase, ResetOutcome, SubmitOutcome};
pub use nav::{NavConfig, NavState};
pub use page::{BoundPage, NavLink, PageModel, SectionInfo, bind_page};
pub use reveal::{RevealCandidate, RevealConfig, RevealSet};
