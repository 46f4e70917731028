//! UI rendering for the `RunnerApp`.

use super::app::RunnerApp;
use super::events::handle_key_event;
use crate::config::TuiPreferences;
use crate::runner::{question_outcome, question_status, score, Phase, QuestionOutcome};
use crate::tui::events::{Event, EventHandler};
use crate::tui::overlay::{render_alert, render_help, render_image_overlay};
use crate::tui::theme::{colors, current_theme_name, set_theme, Theme};
use crate::tui::widgets::{
    check_terminal_size, format_mmss, render_empty_state, render_footer_hints,
    render_size_warning, truncate_label, MIN_HEIGHT, MIN_WIDTH,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, stdout};

/// Run the `RunnerApp` TUI.
pub fn run_runner_tui(app: &mut RunnerApp) -> io::Result<()> {
    // Load theme preference
    let prefs = TuiPreferences::load();
    set_theme(Theme::from_name(&prefs.theme));

    // Setup terminal
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Event handler
    let events = EventHandler::default();

    // Main loop
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(_) | Event::Resize(_, _) => {}
            Event::Tick => app.advance_clock(),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    app.clock.disarm();
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function.
fn render(frame: &mut Frame, app: &mut RunnerApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.session().phase() {
        Phase::Browsing => render_browse(frame, chunks[1], app),
        Phase::InProgress | Phase::Submitted => render_attempt(frame, chunks[1], app),
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        let rows = match app.session().phase() {
            Phase::Browsing => BROWSE_HELP,
            _ => ATTEMPT_HELP,
        };
        render_help(frame, "Runner keys", rows);
    }
    render_image_overlay(frame, &app.image_overlay);
    render_alert(frame, &app.alert);
}

const BROWSE_HELP: &[(&str, &str)] = &[
    ("j/k, ↑/↓", "move"),
    ("Enter", "start the highlighted test"),
    ("T", "cycle color theme"),
    ("q", "quit"),
];

const ATTEMPT_HELP: &[(&str, &str)] = &[
    ("h/l, ←/→", "previous / next question"),
    ("[ / ]", "previous / next section"),
    ("j/k, ↑/↓", "move between options"),
    ("Enter", "pick the highlighted option"),
    ("1-9", "pick that option directly"),
    ("i", "view the question's image"),
    ("s", "submit"),
    ("r", "reattempt the same test"),
    ("T", "cycle color theme"),
    ("q", "quit"),
];

fn render_header(frame: &mut Frame, area: Rect, app: &RunnerApp) {
    let scheme = colors();
    let mut spans = vec![
        Span::styled("quizdeck", Style::default().fg(scheme.primary).bold()),
        Span::styled(" · runner", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!("  [{}]", current_theme_name()),
            Style::default().fg(scheme.muted),
        ),
    ];

    if let Some(test) = app.session().selected_test() {
        spans.push(Span::styled(
            format!("  {}", test.title),
            Style::default().fg(scheme.text).bold(),
        ));
        let (label, style) = match app.session().phase() {
            Phase::InProgress => {
                let left = app.session().time_left();
                let timer_color = if left <= 30 { scheme.warning } else { scheme.accent };
                (
                    format!("  ⏱ {}", format_mmss(left)),
                    Style::default().fg(timer_color).bold(),
                )
            }
            Phase::Submitted => (
                "  submitted".to_string(),
                Style::default().fg(scheme.success).bold(),
            ),
            Phase::Browsing => (String::new(), Style::default()),
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_browse(frame: &mut Frame, area: Rect, app: &RunnerApp) {
    let scheme = colors();
    let tests = app.session().tests();
    if tests.is_empty() {
        render_empty_state(frame, area, "The bank is empty", Some("Author some tests first"));
        return;
    }

    let items: Vec<ListItem> = tests
        .iter()
        .map(|t| {
            let label = format!(
                "{}  ({}, {} questions)",
                truncate_label(&t.title, area.width.saturating_sub(25) as usize),
                format_mmss(t.duration_secs),
                t.question_count()
            );
            ListItem::new(label).style(Style::default().fg(scheme.text))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.browse_cursor));

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Select a test to start ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused)),
        )
        .highlight_style(Style::default().bg(scheme.selection).bold())
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_attempt(frame: &mut Frame, area: Rect, app: &RunnerApp) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(30)])
        .split(area);

    render_sidebar(frame, panels[0], app);
    render_question_panel(frame, panels[1], app);
}

/// Sidebar: the question palette for the current section plus the section
/// list, both colored by derived status.
fn render_sidebar(frame: &mut Frame, area: Rect, app: &RunnerApp) {
    let scheme = colors();
    let session = app.session();
    let submitted = session.is_submitted();
    let Some(test) = session.selected_test() else {
        return;
    };

    let mut lines = Vec::new();
    if let Some(section) = session.current_section() {
        lines.push(Line::styled(
            truncate_label(&section.title, 24),
            Style::default().fg(scheme.accent).bold(),
        ));
        lines.push(Line::from(""));

        // Numbered palette, five cells per row.
        let mut row = Vec::new();
        for (qi, question) in section.questions.iter().enumerate() {
            let status = question_status(question, session.answers(), submitted);
            let mut style = Style::default()
                .fg(scheme.status_color(status))
                .add_modifier(Modifier::BOLD);
            if qi == session.question_index() {
                style = style.bg(scheme.selection);
            }
            row.push(Span::styled(format!(" {:>2} ", qi + 1), style));
            if row.len() == 5 {
                lines.push(Line::from(std::mem::take(&mut row)));
            }
        }
        if !row.is_empty() {
            lines.push(Line::from(row));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Sections",
        Style::default().fg(scheme.text_muted).bold(),
    ));
    for (si, section) in test.sections.iter().enumerate() {
        let marker = if si == session.section_index() { "▸ " } else { "  " };
        let style = if si == session.section_index() {
            Style::default().fg(scheme.text).bold()
        } else {
            Style::default().fg(scheme.text_muted)
        };
        lines.push(Line::styled(
            format!("{marker}{}", truncate_label(&section.title, 22)),
            style,
        ));
    }

    if submitted {
        let summary = score(test, session.answers());
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Score {}/{}", summary.correct, summary.total),
            Style::default().fg(scheme.success).bold(),
        ));
        lines.push(Line::styled(
            format!("{} answered", summary.answered),
            Style::default().fg(scheme.text_muted),
        ));
    }

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border)),
    );
    frame.render_widget(sidebar, area);
}

fn render_question_panel(frame: &mut Frame, area: Rect, app: &RunnerApp) {
    let scheme = colors();
    let session = app.session();
    let submitted = session.is_submitted();
    let Some(question) = session.current_question() else {
        render_empty_state(frame, area, "This section has no questions", None);
        return;
    };
    let total = session
        .current_section()
        .map(|s| s.questions.len())
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {} of {total}", session.question_index() + 1),
                Style::default().fg(scheme.text_muted),
            ),
        ]),
        Line::from(""),
        Line::styled(question.text.clone(), Style::default().fg(scheme.text).bold()),
    ];
    if question.image.is_some() {
        lines.push(Line::styled(
            "🖼 press i to view the image",
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }
    lines.push(Line::from(""));

    let selected = session.answers().selected(question.id);
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(i);
        let mut style = if submitted {
            if i == question.correct_answer_index {
                Style::default().fg(scheme.correct).bold()
            } else if is_selected {
                Style::default().fg(scheme.incorrect)
            } else {
                Style::default().fg(scheme.text_muted)
            }
        } else if is_selected {
            Style::default().fg(scheme.answered).bold()
        } else {
            Style::default().fg(scheme.text)
        };
        let at_cursor = !submitted && i == app.option_cursor;
        if at_cursor {
            style = style.bg(scheme.selection);
        }
        let cursor = if at_cursor { "▸" } else { " " };
        let marker = if is_selected { "●" } else { "○" };
        lines.push(Line::styled(
            format!(" {cursor}{marker} {}. {option}", i + 1),
            style,
        ));
    }

    if submitted {
        lines.push(Line::from(""));
        match question_outcome(question, session.answers()) {
            QuestionOutcome::NotAnswered => {
                lines.push(Line::styled(
                    "Not answered",
                    Style::default().fg(scheme.neutral).italic(),
                ));
            }
            QuestionOutcome::Answered {
                selected,
                correct,
                is_correct,
            } => {
                let (verdict, color) = if is_correct {
                    ("Correct", scheme.correct)
                } else {
                    ("Incorrect", scheme.incorrect)
                };
                lines.push(Line::from(vec![
                    Span::styled(verdict, Style::default().fg(color).bold()),
                    Span::styled(
                        format!("  you chose \"{selected}\", answer \"{correct}\""),
                        Style::default().fg(scheme.text_muted),
                    ),
                ]));
            }
        }
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border_focused)),
    );
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &RunnerApp) {
    let hints: &[(&str, &str)] = match app.session().phase() {
        Phase::Browsing => &[
            ("j/k", "move"),
            ("Enter", "start"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Phase::InProgress => &[
            ("h/l", "question"),
            ("[/]", "section"),
            ("j/k", "option"),
            ("Enter", "answer"),
            ("s", "submit"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Phase::Submitted => &[
            ("h/l", "review"),
            ("[/]", "section"),
            ("r", "reattempt"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };
    render_footer_hints(frame, area, hints);
}
