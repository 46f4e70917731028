//! The authoring workspace: tests under construction plus the current
//! selection for add operations.

use super::draft::QuestionDraft;
use crate::bank;
use crate::error::{QuizError, Result};
use crate::model::{QuestionId, Section, Test};
use std::path::Path;

/// Growable collection of tests with a single "current" test and section
/// that subsequent add operations target.
///
/// Every mutating operation validates first and leaves prior state unchanged
/// on rejection.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    tests: Vec<Test>,
    current_test: Option<usize>,
    current_section: usize,
    preview: bool,
    next_question_id: u64,
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_question_id: 1,
            ..Self::default()
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
    pub fn current_test_index(&self) -> Option<usize> {
        self.current_test
    }

    #[must_use]
    pub fn current_test(&self) -> Option<&Test> {
        self.current_test.and_then(|i| self.tests.get(i))
    }

    #[must_use]
    pub fn current_section_index(&self) -> usize {
        self.current_section
    }

    #[must_use]
    pub fn current_section(&self) -> Option<&Section> {
        self.current_test()?.sections.get(self.current_section)
    }

    #[must_use]
    pub fn preview(&self) -> bool {
        self.preview
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Append a new test with empty sections and select it as current.
    pub fn create_test(&mut self, title: &str, duration_secs: u32) -> Result<()> {
        if title.trim().is_empty() {
            return Err(QuizError::validation("Test title required"));
        }
        self.tests.push(Test::new(title.trim(), duration_secs));
        self.current_test = Some(self.tests.len() - 1);
        self.current_section = 0;
        Ok(())
    }

    /// Append a section to the current test and select it.
    pub fn add_section(&mut self, title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(QuizError::validation("Section title required"));
        }
        let idx = self
            .current_test
            .ok_or_else(|| QuizError::validation("Select or create a test first"))?;
        let test = &mut self.tests[idx];
        test.sections.push(Section::new(title.trim()));
        self.current_section = test.sections.len() - 1;
        Ok(())
    }

    /// Commit the draft as a question in the current section.
    ///
    /// Mints the next monotonic id on success. The caller resets its form on
    /// success; on rejection nothing changes.
    pub fn add_question(&mut self, draft: &QuestionDraft) -> Result<QuestionId> {
        draft.validate()?;
        let idx = self
            .current_test
            .ok_or_else(|| QuizError::validation("Select or create a test first"))?;
        let section = self.tests[idx]
            .sections
            .get_mut(self.current_section)
            .ok_or_else(|| QuizError::validation("Add a section first"))?;
        let id = QuestionId(self.next_question_id);
        self.next_question_id += 1;
        section.questions.push(draft.build(id));
        Ok(id)
    }

    /// Make the test at `idx` current for subsequent add operations.
    /// Selecting a test resets the section selection to its first section.
    pub fn select_test(&mut self, idx: usize) {
        if idx < self.tests.len() {
            self.current_test = Some(idx);
            self.current_section = 0;
        }
    }

    /// Make the section at `idx` of the current test current.
    pub fn select_section(&mut self, idx: usize) {
        if let Some(test) = self.current_test() {
            if idx < test.sections.len() {
                self.current_section = idx;
            }
        }
    }

    /// Flip the right pane between editor and read-only preview.
    pub fn toggle_preview(&mut self) {
        self.preview = !self.preview;
    }

    /// Export all tests as a JSON bank file.
    pub fn export(&self, path: &Path) -> Result<()> {
        bank::save(path, &self.tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, options: &[&str], correct: usize) -> QuestionDraft {
        QuestionDraft {
            text: text.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            correct,
            image: String::new(),
        }
    }

    #[test]
    fn test_create_test_empty_title_leaves_collection_unchanged() {
        let mut ws = Workspace::new();
        let err = ws.create_test("  ", 300).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
        assert!(ws.tests().is_empty());
        assert_eq!(ws.current_test_index(), None);
    }

    #[test]
    fn test_create_test_selects_new_test() {
        let mut ws = Workspace::new();
        ws.create_test("First", 300).unwrap();
        ws.create_test("Second", 120).unwrap();
        assert_eq!(ws.current_test_index(), Some(1));
        assert_eq!(ws.current_test().unwrap().title, "Second");
        assert!(ws.current_test().unwrap().sections.is_empty());
    }

    #[test]
    fn test_add_section_requires_current_test() {
        let mut ws = Workspace::new();
        assert!(ws.add_section("S1").is_err());
        ws.create_test("T", 60).unwrap();
        assert!(ws.add_section("").is_err());
        ws.add_section("S1").unwrap();
        ws.add_section("S2").unwrap();
        // Newest section becomes current.
        assert_eq!(ws.current_section_index(), 1);
    }

    #[test]
    fn test_add_question_with_empty_option_leaves_section_unchanged() {
        let mut ws = Workspace::new();
        ws.create_test("T", 60).unwrap();
        ws.add_section("S1").unwrap();
        let err = ws.add_question(&draft("Q?", &["a", ""], 0)).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
        assert_eq!(ws.current_section().unwrap().questions.len(), 0);
    }

    #[test]
    fn test_add_question_with_out_of_range_marker_is_rejected() {
        let mut ws = Workspace::new();
        ws.create_test("T", 60).unwrap();
        ws.add_section("S1").unwrap();
        let err = ws.add_question(&draft("Q?", &["a", "b"], 5)).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
        assert_eq!(ws.current_section().unwrap().questions.len(), 0);
        // Whatever the workspace holds stays exportable.
        assert!(crate::bank::validate(ws.tests()).is_ok());
    }

    #[test]
    fn test_add_question_requires_section() {
        let mut ws = Workspace::new();
        ws.create_test("T", 60).unwrap();
        let err = ws.add_question(&draft("Q?", &["a", "b"], 0)).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
    }

    #[test]
    fn test_question_ids_are_monotonic_and_unique() {
        let mut ws = Workspace::new();
        ws.create_test("T", 60).unwrap();
        ws.add_section("S1").unwrap();
        let a = ws.add_question(&draft("Q1?", &["a", "b"], 0)).unwrap();
        let b = ws.add_question(&draft("Q2?", &["a", "b"], 1)).unwrap();
        ws.add_section("S2").unwrap();
        let c = ws.add_question(&draft("Q3?", &["a", "b"], 0)).unwrap();
        assert!(a < b && b < c);
        let ids: Vec<_> = ws.current_test().unwrap().questions().map(|q| q.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_select_test_resets_section_selection() {
        let mut ws = Workspace::new();
        ws.create_test("A", 60).unwrap();
        ws.add_section("A1").unwrap();
        ws.add_section("A2").unwrap();
        ws.create_test("B", 60).unwrap();
        ws.select_test(0);
        assert_eq!(ws.current_section_index(), 0);
        // Out-of-range selection is ignored.
        ws.select_test(9);
        assert_eq!(ws.current_test_index(), Some(0));
    }
}
