//! Test-taking state machine and derived grading.
//!
//! A [`Session`] drives one attempt at a time over a fixed collection of
//! tests: `Browsing -> InProgress -> Submitted`, with `reattempt` looping
//! back to `InProgress`. Grading lives in [`grading`] as pure projections
//! over the attempt state; nothing about correctness is ever cached.

pub mod grading;
mod session;

pub use grading::{question_outcome, question_status, score, QuestionOutcome, QuestionStatus, ScoreSummary};
pub use session::{Phase, Session};
