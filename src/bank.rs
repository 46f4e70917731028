//! Test bank persistence and the built-in sample set.
//!
//! A bank is a JSON array of [`Test`] records. The authoring screen exports
//! one; the runner consumes one (or falls back to [`sample_tests`]). Loaded
//! banks are validated before the runner accepts them so every invariant the
//! attempt machinery relies on (non-empty titles, two-plus options, in-range
//! correct index, unique ids) holds up front.

use crate::error::{BankErrorKind, QuizError, Result};
use crate::model::Test;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load and validate a test bank from a JSON file.
pub fn load(path: &Path) -> Result<Vec<Test>> {
    let content =
        fs::read_to_string(path).map_err(|e| QuizError::bank(path, BankErrorKind::Read(e)))?;
    let tests: Vec<Test> =
        serde_json::from_str(&content).map_err(|e| QuizError::bank(path, BankErrorKind::Json(e)))?;
    validate(&tests).map_err(|msg| QuizError::bank(path, BankErrorKind::Shape(msg)))?;
    tracing::debug!("loaded {} test(s) from {}", tests.len(), path.display());
    Ok(tests)
}

/// Write a test bank as pretty JSON, creating parent directories as needed.
pub fn save(path: &Path, tests: &[Test]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| QuizError::bank(path, BankErrorKind::Write(e)))?;
        }
    }
    let json = to_json(tests)?;
    fs::write(path, json).map_err(|e| QuizError::bank(path, BankErrorKind::Write(e)))?;
    tracing::debug!("saved {} test(s) to {}", tests.len(), path.display());
    Ok(())
}

/// Serialize a bank as pretty JSON.
pub fn to_json(tests: &[Test]) -> Result<String> {
    serde_json::to_string_pretty(tests)
        .map_err(|e| QuizError::bank("<memory>", BankErrorKind::Json(e)))
}

/// Check the structural invariants of a loaded bank.
///
/// Returns a human-readable description of the first problem found.
pub fn validate(tests: &[Test]) -> std::result::Result<(), String> {
    for (ti, test) in tests.iter().enumerate() {
        if test.title.trim().is_empty() {
            return Err(format!("test #{ti} has an empty title"));
        }
        if test.duration_secs == 0 {
            return Err(format!("test '{}' has a zero duration", test.title));
        }
        let mut seen_ids = HashSet::new();
        for section in &test.sections {
            if section.title.trim().is_empty() {
                return Err(format!("test '{}' has a section with an empty title", test.title));
            }
            for q in &section.questions {
                if q.text.trim().is_empty() {
                    return Err(format!("question {} has empty text", q.id));
                }
                if q.options.len() < 2 {
                    return Err(format!("question {} has fewer than two options", q.id));
                }
                if q.options.iter().any(|o| o.trim().is_empty()) {
                    return Err(format!("question {} has an empty option", q.id));
                }
                if q.correct_answer_index >= q.options.len() {
                    return Err(format!(
                        "question {} correctAnswerIndex {} out of range (only {} options)",
                        q.id,
                        q.correct_answer_index,
                        q.options.len()
                    ));
                }
                if !seen_ids.insert(q.id) {
                    return Err(format!(
                        "duplicate question id {} in test '{}'",
                        q.id, test.title
                    ));
                }
            }
        }
    }
    Ok(())
}

/// The hard-coded pre-seeded dataset the runner falls back to when no bank
/// file is given.
#[must_use]
pub fn sample_tests() -> Vec<Test> {
    let json = include_str!("sample_bank.json");
    let tests: Vec<Test> = serde_json::from_str(json).expect("built-in sample bank is valid JSON");
    debug_assert!(validate(&tests).is_ok());
    tests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionId, Section};

    fn valid_test() -> Test {
        Test {
            title: "T".to_string(),
            duration_secs: 60,
            sections: vec![Section {
                title: "S".to_string(),
                questions: vec![Question {
                    id: QuestionId(1),
                    text: "q".to_string(),
                    options: vec!["a".to_string(), "b".to_string()],
                    correct_answer_index: 0,
                    image: None,
                }],
            }],
        }
    }

    #[test]
    fn test_sample_bank_is_valid() {
        let tests = sample_tests();
        assert!(validate(&tests).is_ok());
        assert_eq!(tests[0].title, "Sample Test 01");
        assert_eq!(tests[0].duration_secs, 300);
        assert_eq!(tests[0].question_count(), 2);
        // Second question carries the placeholder image reference.
        assert!(tests[0].question(0, 1).and_then(|q| q.image.as_deref()).is_some());
    }

    #[test]
    fn test_validate_rejects_out_of_range_correct_index() {
        let mut test = valid_test();
        test.sections[0].questions[0].correct_answer_index = 5;
        let err = validate(&[test]).unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut test = valid_test();
        let dup = test.sections[0].questions[0].clone();
        test.sections[0].questions.push(dup);
        let err = validate(&[test]).unwrap_err();
        assert!(err.contains("duplicate question id"));
    }

    #[test]
    fn test_validate_rejects_single_option() {
        let mut test = valid_test();
        test.sections[0].questions[0].options.pop();
        test.sections[0].questions[0].correct_answer_index = 0;
        let err = validate(&[test]).unwrap_err();
        assert!(err.contains("fewer than two options"));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut test = valid_test();
        test.duration_secs = 0;
        assert!(validate(&[test]).is_err());
    }
}
