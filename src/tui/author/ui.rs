//! UI rendering for the `AuthorApp`.

use super::app::{AuthorApp, Focus};
use super::events::handle_key_event;
use crate::config::TuiPreferences;
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

/// Run the `AuthorApp` TUI.
pub fn run_author_tui(app: &mut AuthorApp) -> io::Result<()> {
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
            Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function.
fn render(frame: &mut Frame, app: &mut AuthorApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Min(10),    // Body
            Constraint::Length(1),  // Status line
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(chunks[1]);

    render_left_panel(frame, panels[0], app);
    if app.workspace().preview() {
        render_preview(frame, panels[1], app);
    } else {
        render_editor(frame, panels[1], app);
    }

    render_status(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    // Overlays, topmost last
    if app.show_help {
        render_help(frame, "Authoring keys", HELP_ROWS);
    }
    render_image_overlay(frame, &app.image_overlay);
    render_alert(frame, &app.alert);
}

const HELP_ROWS: &[(&str, &str)] = &[
    ("Tab/S-Tab", "cycle focus"),
    ("Enter", "commit the focused form"),
    ("j/k, ↑/↓", "move in lists and preview"),
    ("Ctrl+n", "add an option slot"),
    ("Ctrl+d", "remove the focused option"),
    ("Ctrl+k", "mark the focused option correct"),
    ("p", "toggle preview"),
    ("i", "view the highlighted question's image"),
    ("w", "export the bank"),
    ("T", "cycle color theme"),
    ("q", "quit"),
];

fn render_header(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let scheme = colors();
    let line = Line::from(vec![
        Span::styled("quizdeck", Style::default().fg(scheme.primary).bold()),
        Span::styled(" · authoring", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!("  [{}]", current_theme_name()),
            Style::default().fg(scheme.muted),
        ),
        Span::styled(
            format!("  → {}", app.out_path.display()),
            Style::default().fg(scheme.text_muted),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_left_panel(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(area);

    render_test_list(frame, chunks[0], app);

    // Create-test form
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(chunks[1]);
    render_input(
        frame,
        form[0],
        "New test title",
        &app.test_title_input,
        app.focus == Focus::TestTitle,
    );
    render_input(
        frame,
        form[1],
        "Duration (seconds)",
        &app.duration_input,
        app.focus == Focus::Duration,
    );
}

fn render_test_list(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let scheme = colors();
    let focused = app.focus == Focus::TestList;
    let border = if focused {
        scheme.border_focused
    } else {
        scheme.border
    };

    let items: Vec<ListItem> = app
        .workspace()
        .tests()
        .iter()
        .map(|t| {
            let label = format!(
                "{} ({}, {} questions)",
                truncate_label(&t.title, area.width.saturating_sub(20) as usize),
                format_mmss(t.duration_secs),
                t.question_count()
            );
            ListItem::new(label).style(Style::default().fg(scheme.text))
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.workspace().current_test_index());

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Tests ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(
            Style::default()
                .bg(scheme.selection)
                .fg(scheme.text)
                .bold(),
        )
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_editor(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let Some(test) = app.workspace().current_test() else {
        render_empty_state(
            frame,
            area,
            "No test selected",
            Some("Fill in a title and press Enter to create one"),
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Section title input
            Constraint::Length(6),  // Section list
            Constraint::Min(8),     // Question form
        ])
        .split(area);

    render_input(
        frame,
        chunks[0],
        &format!("New section in \"{}\"", test.title),
        &app.section_title_input,
        app.focus == Focus::SectionTitle,
    );
    render_section_list(frame, chunks[1], app);

    if app.workspace().current_section().is_some() {
        render_question_form(frame, chunks[2], app);
    } else {
        render_empty_state(
            frame,
            chunks[2],
            "No sections yet",
            Some("Add a section before entering questions"),
        );
    }
}

fn render_section_list(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let scheme = colors();
    let focused = app.focus == Focus::SectionList;
    let border = if focused {
        scheme.border_focused
    } else {
        scheme.border
    };

    let sections = app
        .workspace()
        .current_test()
        .map(|t| t.sections.as_slice())
        .unwrap_or_default();
    let items: Vec<ListItem> = sections
        .iter()
        .map(|s| {
            ListItem::new(format!("{} ({} questions)", s.title, s.questions.len()))
                .style(Style::default().fg(scheme.text))
        })
        .collect();

    let mut state = ListState::default();
    if !sections.is_empty() {
        state.select(Some(app.workspace().current_section_index()));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Sections ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().bg(scheme.selection).bold())
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_question_form(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let scheme = colors();
    let option_rows = app.draft.options.len() as u16;
    let mut constraints = vec![Constraint::Length(3)]; // question text
    constraints.push(Constraint::Length(option_rows + 2)); // options box
    constraints.push(Constraint::Length(3)); // image field
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_input(
        frame,
        chunks[0],
        "Question",
        &app.draft.text,
        app.focus == Focus::QuestionText,
    );

    // Options with the correct-answer marker
    let any_option_focused = matches!(app.focus, Focus::OptionField(_));
    let mut lines = Vec::new();
    for (i, option) in app.draft.options.iter().enumerate() {
        let focused = app.focus == Focus::OptionField(i);
        let marker = if i == app.draft.correct { "✓" } else { " " };
        let cursor = if focused { "▏" } else { "" };
        let style = if focused {
            Style::default().fg(scheme.text).bold()
        } else {
            Style::default().fg(scheme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {marker} "),
                Style::default().fg(scheme.correct).bold(),
            ),
            Span::styled(format!("{}. ", i + 1), Style::default().fg(scheme.muted)),
            Span::styled(format!("{option}{cursor}"), style),
        ]));
    }
    let border = if any_option_focused {
        scheme.border_focused
    } else {
        scheme.border
    };
    let options_box = Paragraph::new(lines).block(
        Block::default()
            .title(" Options ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(options_box, chunks[1]);

    render_input(
        frame,
        chunks[2],
        "Image (optional)",
        &app.draft.image,
        app.focus == Focus::ImageField,
    );
}

fn render_preview(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let scheme = colors();
    let Some(test) = app.workspace().current_test() else {
        return;
    };

    let flat = app.preview_questions();
    let mut lines = vec![Line::from(vec![
        Span::styled(test.title.clone(), Style::default().fg(scheme.primary).bold()),
        Span::styled(
            format!("  {}  {} questions", format_mmss(test.duration_secs), flat.len()),
            Style::default().fg(scheme.text_muted),
        ),
    ])];

    let mut flat_idx = 0;
    for section in &test.sections {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            section.title.clone(),
            Style::default().fg(scheme.accent).bold(),
        ));
        for question in &section.questions {
            let highlighted = flat_idx == app.preview_cursor;
            let cursor = if highlighted { "▸ " } else { "  " };
            let style = if highlighted {
                Style::default().fg(scheme.text).bg(scheme.selection).bold()
            } else {
                Style::default().fg(scheme.text)
            };
            let image_tag = if question.image.is_some() { " 🖼" } else { "" };
            lines.push(Line::styled(
                format!("{cursor}{}{image_tag}", question.text),
                style,
            ));
            for (i, option) in question.options.iter().enumerate() {
                let option_style = if i == question.correct_answer_index {
                    Style::default().fg(scheme.correct)
                } else {
                    Style::default().fg(scheme.text_muted)
                };
                lines.push(Line::styled(format!("      {}. {option}", i + 1), option_style));
            }
            flat_idx += 1;
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().border_focused)),
    );
    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let scheme = colors();
    let border = if focused {
        scheme.border_focused
    } else {
        scheme.border
    };
    let cursor = if focused { "▏" } else { "" };
    let input = Paragraph::new(format!("{value}{cursor}"))
        .style(Style::default().fg(scheme.text))
        .block(
            Block::default()
                .title(format!(" {label} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(input, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let scheme = colors();
    if let Some(message) = &app.status_message {
        frame.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(scheme.success)),
            area,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &AuthorApp) {
    let hints: &[(&str, &str)] = if app.workspace().preview() {
        &[
            ("j/k", "move"),
            ("i", "image"),
            ("p", "edit"),
            ("w", "export"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("Tab", "focus"),
            ("Enter", "commit"),
            ("p", "preview"),
            ("w", "export"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };
    render_footer_hints(frame, area, hints);
}
