//! Core data model: tests, sections, questions and answer sheets.
//!
//! A [`Test`] is a timed quiz composed of ordered [`Section`]s, each holding
//! ordered multiple-choice [`Question`]s. The serde representation matches
//! the JSON test-bank shape (`camelCase` field names, `correctAnswerIndex`),
//! so banks written by the authoring screen load unchanged in the runner.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier for a question.
///
/// Ids are minted from a monotonic per-workspace counter, never from
/// wall-clock time, and are unique within a test. Answer sheets key on them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single multiple-choice item with one correct option and an optional
/// displayable image reference. Immutable once added to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    /// Ordered answer options; at least two, each non-empty.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer_index: usize,
    /// Displayable reference to image content (a local path or URL).
    /// Not decoded or uploaded anywhere.
    #[serde(default)]
    pub image: Option<String>,
}

impl Question {
    /// Whether the given option index is the correct answer.
    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_answer_index
    }

    /// The text of the correct option, if the index is in range.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer_index).map(String::as_str)
    }
}

/// A named grouping of questions within a test. Append-only: sections are
/// never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Section {
    /// Create an empty section with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }
}

/// A timed quiz composed of ordered sections. The duration is fixed at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub title: String,
    /// Total time allowed for one attempt, in seconds.
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    pub sections: Vec<Section>,
}

impl Test {
    /// Create a test with no sections yet.
    #[must_use]
    pub fn new(title: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            title: title.into(),
            duration_secs,
            sections: Vec::new(),
        }
    }

    /// Total number of questions across all sections.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Look up a question by section/question indices.
    #[must_use]
    pub fn question(&self, section: usize, index: usize) -> Option<&Question> {
        self.sections.get(section)?.questions.get(index)
    }

    /// Iterate over all questions in document order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }
}

/// Mapping from question id to the selected option index.
///
/// Grows as the user answers and never shrinks within an attempt;
/// re-answering a question overwrites the prior selection (single-select).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selections: HashMap<QuestionId, usize>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, overwriting any prior answer for the question.
    pub fn select(&mut self, id: QuestionId, option_index: usize) {
        self.selections.insert(id, option_index);
    }

    /// The stored selection for a question, if any.
    #[must_use]
    pub fn selected(&self, id: QuestionId) -> Option<usize> {
        self.selections.get(&id).copied()
    }

    #[must_use]
    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.selections.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Drop all selections (new attempt).
    pub fn clear(&mut self) {
        self.selections.clear();
    }
}
