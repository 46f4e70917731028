//! One run of the test-taking flow, from start to submission.

use crate::error::{QuizError, Result};
use crate::model::{AnswerSheet, Question, QuestionId, Section, Test};

/// Attempt lifecycle.
///
/// `Submitted` is terminal for answers and the timer; only [`Session::reattempt`]
/// leaves it, and it never goes back through `Browsing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No test selected yet.
    Browsing,
    /// Timer running, answers mutable.
    InProgress,
    /// Answers and timer frozen; grading view active.
    Submitted,
}

/// A single attempt over a fixed collection of tests.
///
/// All mutation happens on the UI event thread; each operation reads the
/// previous state and produces the next, so no locking is involved.
#[derive(Debug, Clone)]
pub struct Session {
    tests: Vec<Test>,
    selected: Option<usize>,
    section: usize,
    question: usize,
    answers: AnswerSheet,
    time_left: u32,
    phase: Phase,
}

impl Session {
    /// Create a session in `Browsing` over a pre-seeded set of tests.
    #[must_use]
    pub fn new(tests: Vec<Test>) -> Self {
        Self {
            tests,
            selected: None,
            section: 0,
            question: 0,
            answers: AnswerSheet::new(),
            time_left: 0,
            phase: Phase::Browsing,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    #[must_use]
    pub fn selected_test(&self) -> Option<&Test> {
        self.selected.and_then(|i| self.tests.get(i))
    }

    /// Seconds remaining in the attempt.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question
    }

    #[must_use]
    pub fn current_section(&self) -> Option<&Section> {
        self.selected_test()?.sections.get(self.section)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_section()?.questions.get(self.question)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Start an attempt at the test at `index`.
    ///
    /// Initializes the countdown to the test's duration, resets the
    /// section/question pointers to (0, 0) and clears all answers.
    pub fn start(&mut self, index: usize) -> Result<()> {
        let duration = self
            .tests
            .get(index)
            .map(|t| t.duration_secs)
            .ok_or_else(|| QuizError::validation(format!("No such test: {index}")))?;
        self.selected = Some(index);
        self.time_left = duration;
        self.section = 0;
        self.question = 0;
        self.answers.clear();
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Advance the countdown by one second.
    ///
    /// Only meaningful while `InProgress`; reaching zero force-submits.
    /// Returns `true` when this tick caused the forced submission, so the
    /// caller can disarm its clock.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        if self.time_left > 0 {
            self.time_left -= 1;
        }
        if self.time_left == 0 {
            self.phase = Phase::Submitted;
            return true;
        }
        false
    }

    /// Manual submission; freezes answers and the grading view.
    pub fn submit(&mut self) {
        if self.phase == Phase::InProgress {
            self.phase = Phase::Submitted;
        }
    }

    /// Start over on the same test: restore the original duration, clear
    /// answers, reset pointers. Only valid from `Submitted`.
    pub fn reattempt(&mut self) {
        if self.phase != Phase::Submitted {
            return;
        }
        if let Some(idx) = self.selected {
            self.time_left = self.tests[idx].duration_secs;
            self.section = 0;
            self.question = 0;
            self.answers.clear();
            self.phase = Phase::InProgress;
        }
    }

    /// Record an answer; single-select, overwriting any prior choice.
    ///
    /// Ignored outside `InProgress` and for unknown questions or
    /// out-of-range option indices.
    pub fn select_answer(&mut self, id: QuestionId, option_index: usize) {
        if self.phase != Phase::InProgress {
            return;
        }
        let valid = self
            .selected_test()
            .map(|t| {
                t.questions()
                    .any(|q| q.id == id && option_index < q.options.len())
            })
            .unwrap_or(false);
        if valid {
            self.answers.select(id, option_index);
        }
    }

    // ------------------------------------------------------------------
    // Navigation (pointer moves only; phase and timer untouched)
    // ------------------------------------------------------------------

    pub fn next_question(&mut self) {
        if let Some(section) = self.current_section() {
            if self.question + 1 < section.questions.len() {
                self.question += 1;
            }
        }
    }

    pub fn prev_question(&mut self) {
        self.question = self.question.saturating_sub(1);
    }

    /// Jump straight to a question within the current section (sidebar
    /// palette). Out-of-range indices are ignored.
    pub fn jump_to_question(&mut self, idx: usize) {
        if let Some(section) = self.current_section() {
            if idx < section.questions.len() {
                self.question = idx;
            }
        }
    }

    /// Move the section pointer, resetting the question pointer to the
    /// section's first question.
    pub fn select_section(&mut self, idx: usize) {
        if let Some(test) = self.selected_test() {
            if idx < test.sections.len() {
                self.section = idx;
                self.question = 0;
            }
        }
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section + 1);
    }

    pub fn prev_section(&mut self) {
        if self.section > 0 {
            self.select_section(self.section - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::sample_tests;

    fn session() -> Session {
        Session::new(sample_tests())
    }

    #[test]
    fn test_new_session_is_browsing() {
        let s = session();
        assert_eq!(s.phase(), Phase::Browsing);
        assert!(s.selected_test().is_none());
        assert!(s.current_question().is_none());
    }

    #[test]
    fn test_start_initializes_attempt() {
        let mut s = session();
        s.start(0).unwrap();
        assert_eq!(s.phase(), Phase::InProgress);
        assert_eq!(s.time_left(), 300);
        assert_eq!((s.section_index(), s.question_index()), (0, 0));
        assert!(s.answers().is_empty());
    }

    #[test]
    fn test_start_invalid_index_is_rejected() {
        let mut s = session();
        assert!(s.start(5).is_err());
        assert_eq!(s.phase(), Phase::Browsing);
    }

    #[test]
    fn test_select_answer_only_in_progress() {
        let mut s = session();
        let id = QuestionId(1);
        s.select_answer(id, 1);
        assert!(s.answers().is_empty());

        s.start(0).unwrap();
        s.select_answer(id, 1);
        assert_eq!(s.answers().selected(id), Some(1));

        s.submit();
        s.select_answer(id, 2);
        assert_eq!(s.answers().selected(id), Some(1));
    }

    #[test]
    fn test_select_answer_ignores_out_of_range_option() {
        let mut s = session();
        s.start(0).unwrap();
        s.select_answer(QuestionId(1), 99);
        assert!(s.answers().is_empty());
    }

    #[test]
    fn test_navigation_clamps_to_section_bounds() {
        let mut s = session();
        s.start(0).unwrap();
        s.prev_question();
        assert_eq!(s.question_index(), 0);
        s.next_question();
        assert_eq!(s.question_index(), 1);
        // Section 1 of the sample has two questions; stay at the last.
        s.next_question();
        assert_eq!(s.question_index(), 1);
        s.jump_to_question(7);
        assert_eq!(s.question_index(), 1);
        s.jump_to_question(0);
        assert_eq!(s.question_index(), 0);
    }

    #[test]
    fn test_tick_counts_down_and_force_submits() {
        let mut s = session();
        s.start(0).unwrap();
        assert!(!s.tick());
        assert_eq!(s.time_left(), 299);
        for _ in 0..298 {
            assert!(!s.tick());
        }
        assert_eq!(s.time_left(), 1);
        assert!(s.tick());
        assert_eq!(s.phase(), Phase::Submitted);
        // Terminal: no further decrements.
        assert!(!s.tick());
        assert_eq!(s.time_left(), 0);
    }

    #[test]
    fn test_reattempt_restores_duration_and_clears_answers() {
        let mut s = session();
        s.start(0).unwrap();
        s.select_answer(QuestionId(1), 1);
        s.next_question();
        s.tick();
        s.submit();
        assert!(s.is_submitted());

        s.reattempt();
        assert_eq!(s.phase(), Phase::InProgress);
        assert_eq!(s.time_left(), 300);
        assert!(s.answers().is_empty());
        assert_eq!((s.section_index(), s.question_index()), (0, 0));
        assert_eq!(s.selected_test().unwrap().title, "Sample Test 01");
    }

    #[test]
    fn test_reattempt_is_noop_outside_submitted() {
        let mut s = session();
        s.reattempt();
        assert_eq!(s.phase(), Phase::Browsing);
        s.start(0).unwrap();
        s.tick();
        s.reattempt();
        assert_eq!(s.time_left(), 299);
    }
}
