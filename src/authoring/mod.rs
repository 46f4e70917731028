//! Authoring state machine: building tests section by section.
//!
//! The [`Workspace`] owns the growable collection of tests plus the current
//! test/section selection; the [`QuestionDraft`] models the question entry
//! form before a question is committed. Committed questions are immutable.

mod draft;
mod workspace;

pub use draft::{QuestionDraft, MIN_OPTIONS};
pub use workspace::Workspace;
