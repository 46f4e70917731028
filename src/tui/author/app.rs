//! Application state for the authoring screen.

use crate::authoring::{QuestionDraft, Workspace};
use crate::tui::overlay::{AlertState, ImageOverlay};
use std::path::PathBuf;

/// Which widget currently receives text input / list navigation.
///
/// The ring order matches the visual layout: left panel top to bottom, then
/// the right-panel editor fields. Entries that aren't applicable (no current
/// test, no sections yet) are skipped when cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TestList,
    TestTitle,
    Duration,
    SectionTitle,
    SectionList,
    QuestionText,
    OptionField(usize),
    ImageField,
}

/// Main application state for the authoring screen.
pub struct AuthorApp {
    /// The authoring state machine.
    pub(crate) workspace: Workspace,

    /// The question entry form.
    pub(crate) draft: QuestionDraft,

    /// Create-test form fields.
    pub(crate) test_title_input: String,
    pub(crate) duration_input: String,

    /// Add-section form field.
    pub(crate) section_title_input: String,

    /// Focused widget.
    pub(crate) focus: Focus,

    /// Cursor within the flattened question list while previewing.
    pub(crate) preview_cursor: usize,

    /// Blocking validation alert.
    pub(crate) alert: AlertState,

    /// Full-screen image viewer.
    pub(crate) image_overlay: ImageOverlay,

    /// Show help overlay.
    pub(crate) show_help: bool,

    /// Transient status line (export confirmations).
    pub(crate) status_message: Option<String>,

    /// Where `w` exports the bank.
    pub(crate) out_path: PathBuf,

    /// Should quit.
    pub(crate) should_quit: bool,
}

impl AuthorApp {
    /// Create a fresh authoring screen exporting to `out_path`.
    #[must_use]
    pub fn new(out_path: PathBuf) -> Self {
        Self {
            workspace: Workspace::new(),
            draft: QuestionDraft::new(),
            test_title_input: String::new(),
            duration_input: "300".to_string(),
            section_title_input: String::new(),
            focus: Focus::TestList,
            preview_cursor: 0,
            alert: AlertState::default(),
            image_overlay: ImageOverlay::default(),
            show_help: false,
            status_message: None,
            out_path,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub(crate) fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ------------------------------------------------------------------
    // Focus ring
    // ------------------------------------------------------------------

    /// The currently applicable focus targets, in cycling order.
    pub(crate) fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::TestList, Focus::TestTitle, Focus::Duration];
        if self.workspace.current_test().is_some() && !self.workspace.preview() {
            ring.push(Focus::SectionTitle);
            ring.push(Focus::SectionList);
            // The question form only appears once the current test has at
            // least one section.
            if self.workspace.current_section().is_some() {
                ring.push(Focus::QuestionText);
                for i in 0..self.draft.options.len() {
                    ring.push(Focus::OptionField(i));
                }
                ring.push(Focus::ImageField);
            }
        }
        ring
    }

    pub(crate) fn next_focus(&mut self) {
        let ring = self.focus_ring();
        let pos = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(pos + 1) % ring.len()];
    }

    pub(crate) fn prev_focus(&mut self) {
        let ring = self.focus_ring();
        let pos = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(pos + ring.len() - 1) % ring.len()];
    }

    /// Drop focus back onto a valid target after the layout changed
    /// (options removed, preview toggled, test deselected).
    pub(crate) fn clamp_focus(&mut self) {
        let ring = self.focus_ring();
        if !ring.contains(&self.focus) {
            self.focus = Focus::TestList;
        }
    }

    /// The text buffer behind the focused field, if it is a text field.
    pub(crate) fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::TestTitle => Some(&mut self.test_title_input),
            Focus::Duration => Some(&mut self.duration_input),
            Focus::SectionTitle => Some(&mut self.section_title_input),
            Focus::QuestionText => Some(&mut self.draft.text),
            Focus::OptionField(i) => self.draft.options.get_mut(i),
            Focus::ImageField => Some(&mut self.draft.image),
            Focus::TestList | Focus::SectionList => None,
        }
    }

    // ------------------------------------------------------------------
    // Commits
    // ------------------------------------------------------------------

    /// Enter on the create-test form.
    pub(crate) fn commit_create_test(&mut self) {
        let duration = match self.duration_input.trim().parse::<u32>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                self.alert.show("Duration must be a positive number of seconds");
                return;
            }
        };
        match self.workspace.create_test(&self.test_title_input, duration) {
            Ok(()) => {
                self.test_title_input.clear();
                self.clamp_focus();
            }
            Err(err) => self.alert.show(err.to_string()),
        }
    }

    /// Enter on the section form.
    pub(crate) fn commit_add_section(&mut self) {
        match self.workspace.add_section(&self.section_title_input) {
            Ok(()) => {
                self.section_title_input.clear();
                self.clamp_focus();
            }
            Err(err) => self.alert.show(err.to_string()),
        }
    }

    /// Enter anywhere in the question form.
    pub(crate) fn commit_add_question(&mut self) {
        match self.workspace.add_question(&self.draft) {
            Ok(_) => {
                self.draft.reset();
                self.focus = Focus::QuestionText;
            }
            Err(err) => self.alert.show(err.to_string()),
        }
    }

    /// `w`: export the workspace as a JSON bank.
    pub(crate) fn export_bank(&mut self) {
        match self.workspace.export(&self.out_path) {
            Ok(()) => self.set_status(format!("Exported to {}", self.out_path.display())),
            Err(err) => self.alert.show(err.to_string()),
        }
    }

    // ------------------------------------------------------------------
    // Preview
    // ------------------------------------------------------------------

    pub(crate) fn toggle_preview(&mut self) {
        if self.workspace.current_test().is_none() {
            return;
        }
        self.workspace.toggle_preview();
        self.preview_cursor = 0;
        self.clamp_focus();
    }

    /// Flattened (section, question) indices of the current test, in
    /// document order, for preview navigation.
    pub(crate) fn preview_questions(&self) -> Vec<(usize, usize)> {
        let Some(test) = self.workspace.current_test() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for (si, section) in test.sections.iter().enumerate() {
            for qi in 0..section.questions.len() {
                out.push((si, qi));
            }
        }
        out
    }

    pub(crate) fn preview_next(&mut self) {
        let total = self.preview_questions().len();
        if total > 0 && self.preview_cursor + 1 < total {
            self.preview_cursor += 1;
        }
    }

    pub(crate) fn preview_prev(&mut self) {
        self.preview_cursor = self.preview_cursor.saturating_sub(1);
    }

    /// `i` while previewing: open the highlighted question's image, if any.
    pub(crate) fn open_preview_image(&mut self) {
        let Some(&(si, qi)) = self.preview_questions().get(self.preview_cursor) else {
            return;
        };
        let image = self
            .workspace
            .current_test()
            .and_then(|t| t.question(si, qi))
            .and_then(|q| q.image.clone());
        if let Some(reference) = image {
            self.image_overlay.open(reference);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AuthorApp {
        AuthorApp::new(PathBuf::from("tests.json"))
    }

    #[test]
    fn test_focus_ring_grows_with_state() {
        let mut app = app();
        assert_eq!(
            app.focus_ring(),
            vec![Focus::TestList, Focus::TestTitle, Focus::Duration]
        );

        app.test_title_input = "T".to_string();
        app.commit_create_test();
        assert!(app.focus_ring().contains(&Focus::SectionTitle));
        assert!(!app.focus_ring().contains(&Focus::QuestionText));

        app.section_title_input = "S1".to_string();
        app.commit_add_section();
        let ring = app.focus_ring();
        assert!(ring.contains(&Focus::QuestionText));
        assert!(ring.contains(&Focus::OptionField(1)));
        assert!(ring.contains(&Focus::ImageField));
    }

    #[test]
    fn test_commit_create_test_rejects_bad_duration() {
        let mut app = app();
        app.test_title_input = "T".to_string();
        app.duration_input = "abc".to_string();
        app.commit_create_test();
        assert!(app.alert.is_open());
        assert!(app.workspace().tests().is_empty());
    }

    #[test]
    fn test_commit_add_question_resets_form() {
        let mut app = app();
        app.test_title_input = "T".to_string();
        app.commit_create_test();
        app.section_title_input = "S1".to_string();
        app.commit_add_section();

        app.draft.text = "Q?".to_string();
        app.draft.options = vec!["a".to_string(), "b".to_string()];
        app.draft.correct = 1;
        app.commit_add_question();
        assert!(!app.alert.is_open());
        assert_eq!(app.draft, QuestionDraft::default());
        assert_eq!(app.focus, Focus::QuestionText);
    }

    #[test]
    fn test_validation_failure_raises_alert_and_keeps_form() {
        let mut app = app();
        app.test_title_input = "T".to_string();
        app.commit_create_test();
        app.section_title_input = "S1".to_string();
        app.commit_add_section();

        app.draft.text = "Q?".to_string();
        // Second option left empty.
        app.commit_add_question();
        assert!(app.alert.is_open());
        assert_eq!(app.draft.text, "Q?");
    }

    #[test]
    fn test_preview_navigation_clamps() {
        let mut app = app();
        app.test_title_input = "T".to_string();
        app.commit_create_test();
        app.section_title_input = "S1".to_string();
        app.commit_add_section();
        app.draft.text = "Q?".to_string();
        app.draft.options = vec!["a".to_string(), "b".to_string()];
        app.commit_add_question();

        app.toggle_preview();
        assert!(app.workspace().preview());
        app.preview_prev();
        assert_eq!(app.preview_cursor, 0);
        app.preview_next();
        assert_eq!(app.preview_cursor, 0); // single question
    }
}
