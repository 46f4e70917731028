//! Question entry form model.

use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionId};

/// A draft never drops below this many option slots.
pub const MIN_OPTIONS: usize = 2;

/// Mutable form state for the question being entered.
///
/// Options may be added and removed freely here; once the draft is committed
/// via [`crate::authoring::Workspace::add_question`] the resulting question
/// is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    /// Index of the option currently marked correct. Kept in range by
    /// construction: option removal re-clamps it.
    pub correct: usize,
    /// Image reference form field; empty means no image.
    pub image: String,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            text: String::new(),
            options: vec![String::new(), String::new()],
            correct: 0,
            image: String::new(),
        }
    }
}

impl QuestionDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty option slot.
    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Remove the option at `idx`.
    ///
    /// Keeps at least [`MIN_OPTIONS`] slots, and keeps the correct-answer
    /// selection pointing at a live option: it follows the marked option
    /// when an earlier one is removed, and clamps to the last slot when the
    /// marked option itself was at or past the removal point.
    pub fn remove_option(&mut self, idx: usize) {
        if self.options.len() <= MIN_OPTIONS || idx >= self.options.len() {
            return;
        }
        self.options.remove(idx);
        if self.correct > idx {
            self.correct -= 1;
        }
        if self.correct >= self.options.len() {
            self.correct = self.options.len() - 1;
        }
    }

    /// Mark the option at `idx` as the correct answer.
    pub fn set_correct(&mut self, idx: usize) {
        if idx < self.options.len() {
            self.correct = idx;
        }
    }

    /// Check the draft is complete enough to commit.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() || self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(QuizError::validation("Question and options required"));
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(QuizError::validation("A question needs at least two options"));
        }
        // The form keeps `correct` in range, but the fields are public.
        if self.correct >= self.options.len() {
            return Err(QuizError::validation(
                "Correct answer must point at one of the options",
            ));
        }
        Ok(())
    }

    /// Build the immutable question. Callers validate first; the id comes
    /// from the workspace's monotonic counter.
    pub(crate) fn build(&self, id: QuestionId) -> Question {
        let image = self.image.trim();
        Question {
            id,
            text: self.text.trim().to_string(),
            options: self.options.clone(),
            correct_answer_index: self.correct,
            image: (!image.is_empty()).then(|| image.to_string()),
        }
    }

    /// Restore the form defaults: empty text, two empty options, first
    /// option marked correct, no image.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> QuestionDraft {
        QuestionDraft {
            text: "Pick one".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()],
            correct: 2,
            image: String::new(),
        }
    }

    #[test]
    fn test_remove_before_marked_option_follows_it() {
        let mut draft = filled_draft();
        draft.remove_option(0);
        // "c" is still the marked option, now at index 1.
        assert_eq!(draft.correct, 1);
        assert_eq!(draft.options[draft.correct], "c");
    }

    #[test]
    fn test_remove_marked_option_clamps() {
        let mut draft = filled_draft();
        draft.correct = 3;
        draft.remove_option(3);
        assert_eq!(draft.correct, 2);
        assert_eq!(draft.options.len(), 3);
    }

    #[test]
    fn test_remove_never_drops_below_two_slots() {
        let mut draft = QuestionDraft::new();
        draft.remove_option(0);
        draft.remove_option(1);
        assert_eq!(draft.options.len(), MIN_OPTIONS);
    }

    #[test]
    fn test_validate_rejects_empty_option() {
        let mut draft = filled_draft();
        draft.options[1].clear();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_marker() {
        let mut draft = filled_draft();
        draft.correct = draft.options.len();
        assert!(draft.validate().is_err());
        draft.correct = 0;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_build_trims_image_to_none() {
        let mut draft = filled_draft();
        draft.image = "   ".to_string();
        let q = draft.build(crate::model::QuestionId(9));
        assert_eq!(q.image, None);
        draft.image = "cat.png".to_string();
        let q = draft.build(crate::model::QuestionId(10));
        assert_eq!(q.image.as_deref(), Some("cat.png"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = filled_draft();
        draft.reset();
        assert_eq!(draft, QuestionDraft::default());
        assert_eq!(draft.options.len(), 2);
        assert_eq!(draft.correct, 0);
    }
}
