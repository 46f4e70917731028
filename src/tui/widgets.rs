//! Small reusable rendering helpers shared by both screens.

use super::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Minimum terminal width for a usable layout.
pub const MIN_WIDTH: u16 = 70;
/// Minimum terminal height for a usable layout.
pub const MIN_HEIGHT: u16 = 20;

/// Check whether the terminal is large enough.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((width, height))
    } else {
        Ok(())
    }
}

/// Render a full-frame warning when the terminal is too small.
pub fn render_size_warning(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    let scheme = colors();
    let text = vec![
        Line::from(""),
        Line::styled(
            "Terminal too small",
            Style::default().fg(scheme.warning).bold(),
        ),
        Line::from(""),
        Line::styled(
            format!(
                "Need at least {min_width}x{min_height}, have {}x{}",
                area.width, area.height
            ),
            Style::default().fg(scheme.text_muted),
        ),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Helper function to create a centered rectangle.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Format seconds as a `mm:ss` countdown.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Truncate a label to `max` display columns, appending an ellipsis when cut.
#[must_use]
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.width() <= max {
        return label.to_string();
    }
    let mut out = String::new();
    for c in label.chars() {
        if out.width() + 1 >= max {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

/// Render a one-line footer of key hints.
pub fn render_footer_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let scheme = colors();
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(scheme.accent).bold(),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(scheme.text_muted),
        ));
    }
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(5), "00:05");
        assert_eq!(format_mmss(300), "05:00");
        assert_eq!(format_mmss(3661), "61:01");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        let cut = truncate_label("a rather long test title", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 10);
    }

    #[test]
    fn test_check_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert!(check_terminal_size(40, 24).is_err());
        assert!(check_terminal_size(80, 10).is_err());
    }
}
