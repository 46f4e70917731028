//! Key handling for the test-taking screen.

use super::app::RunnerApp;
use crate::config::TuiPreferences;
use crate::runner::Phase;
use crate::tui::toggle_theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle key events and update app state.
pub fn handle_key_event(app: &mut RunnerApp, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.alert.is_open() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.alert.dismiss();
        }
        return;
    }

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

    match app.session.phase() {
        Phase::Browsing => handle_browsing_key(app, key),
        Phase::InProgress | Phase::Submitted => handle_attempt_key(app, key),
    }
}

fn handle_browsing_key(app: &mut RunnerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.browse_up(),
        KeyCode::Down | KeyCode::Char('j') => app.browse_down(),
        KeyCode::Enter => app.start_selected(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('T') => theme_toggle(),
        _ => {}
    }
}

fn handle_attempt_key(app: &mut RunnerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.session.prev_question();
            app.option_cursor = 0;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.session.next_question();
            app.option_cursor = 0;
        }
        KeyCode::Char('[') => {
            app.session.prev_section();
            app.option_cursor = 0;
        }
        KeyCode::Char(']') => {
            app.session.next_section();
            app.option_cursor = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => app.option_up(),
        KeyCode::Down | KeyCode::Char('j') => app.option_down(),
        KeyCode::Enter => app.select_cursor_option(),
        // Digits pick an option on the question on screen (1-based display).
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            app.select_option(idx);
        }
        KeyCode::Char('s') => app.submit_now(),
        KeyCode::Char('r') => app.reattempt_now(),
        KeyCode::Char('i') => app.open_current_image(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('T') => theme_toggle(),
        _ => {}
    }
}

fn theme_toggle() {
    let theme_name = toggle_theme();
    let prefs = TuiPreferences {
        theme: theme_name.to_string(),
    };
    let _ = prefs.save();
}
