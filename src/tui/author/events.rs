//! Key handling for the authoring screen.

use super::app::{AuthorApp, Focus};
use crate::config::TuiPreferences;
use crate::tui::toggle_theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle key events and update app state.
pub fn handle_key_event(app: &mut AuthorApp, key: KeyEvent) {
    // Clear any status message on key press
    app.clear_status();

    // Ctrl+C quits from anywhere, even inside text fields.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // A blocking alert swallows everything until dismissed.
    if app.alert.is_open() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.alert.dismiss();
        }
        return;
    }

    // The image viewer closes on any key.
    if app.image_overlay.is_open() {
        app.image_overlay.close();
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Preview mode has its own small keymap.
    if app.workspace().preview() {
        match key.code {
            KeyCode::Char('p') | KeyCode::Esc => app.toggle_preview(),
            KeyCode::Down | KeyCode::Char('j') => app.preview_next(),
            KeyCode::Up | KeyCode::Char('k') => app.preview_prev(),
            KeyCode::Char('i') => app.open_preview_image(),
            KeyCode::Char('w') => app.export_bank(),
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('?') => app.show_help = true,
            KeyCode::Char('T') => theme_toggle(),
            _ => {}
        }
        return;
    }

    // Focus cycling
    match key.code {
        KeyCode::Tab => {
            app.next_focus();
            return;
        }
        KeyCode::BackTab => {
            app.prev_focus();
            return;
        }
        _ => {}
    }

    // Question-form structural edits (Ctrl chords so plain chars stay text).
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match (key.code, app.focus) {
            (KeyCode::Char('n'), _) if in_question_form(app.focus) => {
                app.draft.add_option();
                return;
            }
            (KeyCode::Char('d'), Focus::OptionField(i)) => {
                app.draft.remove_option(i);
                app.clamp_focus();
                return;
            }
            (KeyCode::Char('k'), Focus::OptionField(i)) => {
                app.draft.set_correct(i);
            }
            _ => {}
        }
        // Unbound chords never reach the text fields.
        return;
    }

    match app.focus {
        Focus::TestList => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let current = app.workspace.current_test_index().unwrap_or(0);
                app.workspace.select_test(current.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = app.workspace.current_test_index().map_or(0, |i| i + 1);
                app.workspace.select_test(next);
            }
            KeyCode::Char('p') => app.toggle_preview(),
            KeyCode::Char('w') => app.export_bank(),
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('?') => app.show_help = true,
            KeyCode::Char('T') => theme_toggle(),
            _ => {}
        },
        Focus::SectionList => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let idx = app.workspace.current_section_index();
                app.workspace.select_section(idx.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let idx = app.workspace.current_section_index();
                app.workspace.select_section(idx + 1);
            }
            KeyCode::Char('p') => app.toggle_preview(),
            KeyCode::Char('w') => app.export_bank(),
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('?') => app.show_help = true,
            KeyCode::Char('T') => theme_toggle(),
            KeyCode::Esc => app.focus = Focus::TestList,
            _ => {}
        },
        // Text fields: chars type, Enter commits the owning form.
        Focus::TestTitle | Focus::Duration => match key.code {
            KeyCode::Enter => app.commit_create_test(),
            KeyCode::Esc => app.focus = Focus::TestList,
            KeyCode::Backspace => {
                if let Some(buf) = app.focused_input() {
                    buf.pop();
                }
            }
            KeyCode::Char(c) => {
                // The duration field only takes digits.
                if app.focus != Focus::Duration || c.is_ascii_digit() {
                    if let Some(buf) = app.focused_input() {
                        buf.push(c);
                    }
                }
            }
            _ => {}
        },
        Focus::SectionTitle => match key.code {
            KeyCode::Enter => app.commit_add_section(),
            KeyCode::Esc => app.focus = Focus::TestList,
            KeyCode::Backspace => {
                if let Some(buf) = app.focused_input() {
                    buf.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buf) = app.focused_input() {
                    buf.push(c);
                }
            }
            _ => {}
        },
        Focus::QuestionText | Focus::OptionField(_) | Focus::ImageField => match key.code {
            KeyCode::Enter => app.commit_add_question(),
            KeyCode::Esc => app.focus = Focus::TestList,
            KeyCode::Backspace => {
                if let Some(buf) = app.focused_input() {
                    buf.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buf) = app.focused_input() {
                    buf.push(c);
                }
            }
            _ => {}
        },
    }
}

fn in_question_form(focus: Focus) -> bool {
    matches!(
        focus,
        Focus::QuestionText | Focus::OptionField(_) | Focus::ImageField
    )
}

fn theme_toggle() {
    let theme_name = toggle_theme();
    let prefs = TuiPreferences {
        theme: theme_name.to_string(),
    };
    let _ = prefs.save();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut AuthorApp, s: &str) {
        for c in s.chars() {
            handle_key_event(app, key(KeyCode::Char(c)));
        }
    }

    fn app_with_section() -> AuthorApp {
        let mut app = AuthorApp::new(PathBuf::from("tests.json"));
        app.focus = Focus::TestTitle;
        type_str(&mut app, "Algebra");
        handle_key_event(&mut app, key(KeyCode::Enter));
        app.focus = Focus::SectionTitle;
        type_str(&mut app, "Basics");
        handle_key_event(&mut app, key(KeyCode::Enter));
        app
    }

    #[test]
    fn test_typing_and_creating_a_test() {
        let mut app = AuthorApp::new(PathBuf::from("tests.json"));
        app.focus = Focus::TestTitle;
        type_str(&mut app, "Algebra");
        assert_eq!(app.test_title_input, "Algebra");
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.workspace().tests().len(), 1);
        assert!(app.test_title_input.is_empty());
    }

    #[test]
    fn test_duration_field_rejects_letters() {
        let mut app = AuthorApp::new(PathBuf::from("tests.json"));
        app.focus = Focus::Duration;
        app.duration_input.clear();
        type_str(&mut app, "1a2b0");
        assert_eq!(app.duration_input, "120");
    }

    #[test]
    fn test_alert_blocks_other_keys() {
        let mut app = AuthorApp::new(PathBuf::from("tests.json"));
        app.focus = Focus::TestTitle;
        handle_key_event(&mut app, key(KeyCode::Enter)); // empty title -> alert
        assert!(app.alert.is_open());
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert!(app.alert.is_open());
        assert!(app.test_title_input.is_empty());
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.alert.is_open());
    }

    #[test]
    fn test_ctrl_chords_edit_options() {
        let mut app = app_with_section();
        app.focus = Focus::OptionField(1);
        handle_key_event(&mut app, ctrl('n'));
        assert_eq!(app.draft.options.len(), 3);
        handle_key_event(&mut app, ctrl('k'));
        assert_eq!(app.draft.correct, 1);
        handle_key_event(&mut app, ctrl('d'));
        assert_eq!(app.draft.options.len(), 2);
    }

    #[test]
    fn test_enter_in_question_form_commits() {
        let mut app = app_with_section();
        app.focus = Focus::QuestionText;
        type_str(&mut app, "2+2?");
        app.focus = Focus::OptionField(0);
        type_str(&mut app, "3");
        app.focus = Focus::OptionField(1);
        type_str(&mut app, "4");
        handle_key_event(&mut app, ctrl('k'));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(!app.alert.is_open());
        let section = app.workspace().current_section().unwrap();
        assert_eq!(section.questions.len(), 1);
        assert_eq!(section.questions[0].correct_answer_index, 1);
        // Form resets to defaults.
        assert!(app.draft.text.is_empty());
        assert_eq!(app.draft.options.len(), 2);
    }

    #[test]
    fn test_preview_toggle_and_escape() {
        let mut app = app_with_section();
        app.focus = Focus::TestList;
        handle_key_event(&mut app, key(KeyCode::Char('p')));
        assert!(app.workspace().preview());
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.workspace().preview());
    }
}
