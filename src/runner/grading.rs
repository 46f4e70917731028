//! Derived grading projections.
//!
//! Status coloring and summaries are computed from the authoritative attempt
//! state (answer sheet + submitted flag) on every query, never cached, so
//! the display can't diverge from the data.

use crate::model::{AnswerSheet, Question, Test};

/// Display status of one question, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    /// In progress, no answer stored yet.
    Neutral,
    /// In progress, an answer is stored.
    Answered,
    /// Submitted and the stored answer matches the correct option.
    Correct,
    /// Submitted and the stored answer does not match.
    Incorrect,
    /// Submitted with no stored answer; reported as such, never marked
    /// right or wrong.
    Unanswered,
}

/// Derive the status of `question` from the attempt state.
#[must_use]
pub fn question_status(
    question: &Question,
    answers: &AnswerSheet,
    submitted: bool,
) -> QuestionStatus {
    match answers.selected(question.id) {
        None if submitted => QuestionStatus::Unanswered,
        None => QuestionStatus::Neutral,
        Some(_) if !submitted => QuestionStatus::Answered,
        Some(sel) if question.is_correct(sel) => QuestionStatus::Correct,
        Some(_) => QuestionStatus::Incorrect,
    }
}

/// Post-submission summary for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOutcome {
    NotAnswered,
    Answered {
        selected: String,
        correct: String,
        is_correct: bool,
    },
}

/// Summary line content for `question` in the submitted view.
#[must_use]
pub fn question_outcome(question: &Question, answers: &AnswerSheet) -> QuestionOutcome {
    match answers.selected(question.id) {
        None => QuestionOutcome::NotAnswered,
        Some(sel) => QuestionOutcome::Answered {
            selected: question
                .options
                .get(sel)
                .cloned()
                .unwrap_or_default(),
            correct: question.correct_option().unwrap_or_default().to_string(),
            is_correct: question.is_correct(sel),
        },
    }
}

/// Aggregate attempt score across all sections of a test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

/// Count answered and correct questions over the whole test.
#[must_use]
pub fn score(test: &Test, answers: &AnswerSheet) -> ScoreSummary {
    let mut summary = ScoreSummary::default();
    for q in test.questions() {
        summary.total += 1;
        if let Some(sel) = answers.selected(q.id) {
            summary.answered += 1;
            if q.is_correct(sel) {
                summary.correct += 1;
            }
        }
    }
    summary
}
