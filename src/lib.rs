//! **Terminal quiz authoring and test-taking.**
//!
//! `quizdeck` builds and runs sectioned, timed multiple-choice tests in the
//! terminal. Tests are authored interactively, exported as a JSON bank, and
//! taken against a one-second countdown that force-submits at zero.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The shared data shapes. A [`model::Test`] holds titled
//!   [`model::Section`]s of [`model::Question`]s; an [`model::AnswerSheet`]
//!   maps question ids to chosen option indices.
//! - **[`authoring`]**: The authoring state machine. A
//!   [`authoring::Workspace`] grows tests, sections and questions from
//!   validated form input and exports them as a bank.
//! - **[`runner`]**: The attempt state machine. A [`runner::Session`] runs
//!   the browse / in-progress / submitted lifecycle, and the grading
//!   functions derive per-question status and the score on demand.
//! - **[`bank`]**: The JSON bank format: load, validate, save.
//! - **[`tui`]**: The two ratatui screens over those state machines.
//!
//! ## Getting Started: Grading an Attempt
//!
//! ```
//! use quizdeck::bank::sample_tests;
//! use quizdeck::runner::{score, Session};
//!
//! let mut session = Session::new(sample_tests());
//! session.start(0)?;
//! let id = session.current_question().unwrap().id;
//! session.select_answer(id, 1);
//! session.submit();
//!
//! let summary = score(session.selected_test().unwrap(), session.answers());
//! assert_eq!(summary.correct, 1);
//! # Ok::<(), quizdeck::error::QuizError>(())
//! ```

#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔u16/u32 casts are pervasive in TUI layout math —
    // all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long — splitting hurts readability
    clippy::too_many_lines
)]

pub mod authoring;
pub mod bank;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod runner;
pub mod tui;

pub use error::{QuizError, Result};
pub use model::{AnswerSheet, Question, QuestionId, Section, Test};
pub use runner::{question_outcome, question_status, score, Phase, Session};
