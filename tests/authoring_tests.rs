//! Integration tests for the authoring flow: workspace, draft form, export.

use quizdeck::authoring::{QuestionDraft, Workspace, MIN_OPTIONS};
use quizdeck::{bank, QuizError};

fn draft(text: &str, options: &[&str], correct: usize) -> QuestionDraft {
    QuestionDraft {
        text: text.to_string(),
        options: options.iter().map(ToString::to_string).collect(),
        correct,
        image: String::new(),
    }
}

#[test]
fn test_full_authoring_flow() {
    let mut ws = Workspace::new();
    ws.create_test("Algebra Basics", 600).unwrap();
    ws.add_section("Linear equations").unwrap();
    ws.add_question(&draft("Solve x + 1 = 3", &["1", "2", "3"], 1))
        .unwrap();
    ws.add_question(&draft("Solve 2x = 8", &["2", "4"], 1)).unwrap();
    ws.add_section("Quadratics").unwrap();
    ws.add_question(&draft("Roots of x^2 - 1", &["±1", "±2"], 0))
        .unwrap();

    let test = ws.current_test().unwrap();
    assert_eq!(test.title, "Algebra Basics");
    assert_eq!(test.sections.len(), 2);
    assert_eq!(test.question_count(), 3);
    assert_eq!(test.sections[0].questions.len(), 2);
    assert_eq!(test.sections[1].questions.len(), 1);
}

#[test]
fn test_rejection_messages_match_user_facing_text() {
    let mut ws = Workspace::new();
    assert_eq!(
        ws.create_test("", 300).unwrap_err().to_string(),
        "Test title required"
    );
    ws.create_test("T", 300).unwrap();
    assert_eq!(
        ws.add_section("   ").unwrap_err().to_string(),
        "Section title required"
    );
    ws.add_section("S").unwrap();
    assert_eq!(
        ws.add_question(&draft("", &["a", "b"], 0))
            .unwrap_err()
            .to_string(),
        "Question and options required"
    );
    assert_eq!(
        ws.add_question(&draft("Q?", &["a", " "], 0))
            .unwrap_err()
            .to_string(),
        "Question and options required"
    );
}

#[test]
fn test_committed_questions_always_carry_in_range_marker() {
    let mut ws = Workspace::new();
    ws.create_test("T", 300).unwrap();
    ws.add_section("S").unwrap();

    let err = ws.add_question(&draft("Q?", &["a", "b"], 5)).unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)));
    assert_eq!(ws.current_test().unwrap().question_count(), 0);

    // A boundary marker is rejected too; only live indices commit.
    assert!(ws.add_question(&draft("Q?", &["a", "b"], 2)).is_err());
    ws.add_question(&draft("Q?", &["a", "b"], 1)).unwrap();
    assert!(bank::validate(ws.tests()).is_ok());
}

#[test]
fn test_rejected_operations_leave_state_unchanged() {
    let mut ws = Workspace::new();
    ws.create_test("T", 300).unwrap();
    ws.add_section("S").unwrap();
    ws.add_question(&draft("Q1?", &["a", "b"], 0)).unwrap();

    let before = ws.current_test().unwrap().clone();
    let err = ws.add_question(&draft("", &["a", "b"], 0)).unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)));
    assert_eq!(ws.current_test().unwrap(), &before);
}

#[test]
fn test_option_editing_keeps_correct_marker_consistent() {
    let mut d = QuestionDraft::new();
    assert_eq!(d.options.len(), MIN_OPTIONS);

    d.add_option();
    d.add_option();
    d.set_correct(3);

    // Removing an earlier option shifts the marker with its option.
    d.remove_option(0);
    assert_eq!(d.correct, 2);

    // Removing the marked option clamps to the last slot.
    d.remove_option(2);
    assert_eq!(d.correct, 1);

    // The floor holds.
    d.remove_option(0);
    d.remove_option(0);
    assert_eq!(d.options.len(), MIN_OPTIONS);
    assert!(d.correct < d.options.len());
}

#[test]
fn test_ids_stay_unique_across_sections_and_tests() {
    let mut ws = Workspace::new();
    ws.create_test("A", 60).unwrap();
    ws.add_section("S1").unwrap();
    ws.add_question(&draft("Q1?", &["a", "b"], 0)).unwrap();
    ws.create_test("B", 60).unwrap();
    ws.add_section("S1").unwrap();
    ws.add_question(&draft("Q2?", &["a", "b"], 0)).unwrap();
    ws.add_question(&draft("Q3?", &["a", "b"], 0)).unwrap();

    // The exported bank passes validation, which checks id uniqueness.
    assert!(bank::validate(ws.tests()).is_ok());

    let mut all_ids: Vec<_> = ws
        .tests()
        .iter()
        .flat_map(|t| t.questions().map(|q| q.id))
        .collect();
    let total = all_ids.len();
    all_ids.sort_unstable();
    all_ids.dedup();
    assert_eq!(all_ids.len(), total);
}
