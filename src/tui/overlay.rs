//! Shared overlays: blocking validation alerts and the full-screen image
//! viewer.
//!
//! Both screens use the same overlay state types so the behavior is
//! identical: an alert must be dismissed before anything else happens, and
//! only one image can be shown at a time (opening a second replaces the
//! first).

use super::theme::colors;
use super::widgets::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// A blocking, user-facing validation message.
///
/// While open it swallows all input except dismissal, mirroring a modal
/// `alert()`; the rejected operation has already been aborted with prior
/// state unchanged.
#[derive(Debug, Default)]
pub struct AlertState {
    message: Option<String>,
}

impl AlertState {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The single shared "modal image" value.
#[derive(Debug, Default)]
pub struct ImageOverlay {
    image: Option<String>,
}

impl ImageOverlay {
    /// Show an image reference, replacing any image already shown.
    pub fn open(&mut self, reference: impl Into<String>) {
        self.image = Some(reference.into());
    }

    pub fn close(&mut self) {
        self.image = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// Render the blocking alert popup.
pub fn render_alert(frame: &mut Frame, alert: &AlertState) {
    let Some(message) = alert.message() else {
        return;
    };
    let scheme = colors();
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text).bold()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(scheme.accent)),
            Span::styled("/", Style::default().fg(scheme.text_muted)),
            Span::styled("Esc", Style::default().fg(scheme.accent)),
            Span::styled(" dismiss", Style::default().fg(scheme.text_muted)),
        ]),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Cannot do that ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.error))
                .style(Style::default().bg(scheme.background_alt)),
        );
    frame.render_widget(popup, area);
}

/// Render the full-screen image viewer.
///
/// Terminals don't decode image bytes; the viewer presents the displayable
/// reference prominently, filling most of the frame.
pub fn render_image_overlay(frame: &mut Frame, overlay: &ImageOverlay) {
    let Some(reference) = overlay.current() else {
        return;
    };
    let scheme = colors();
    let area = centered_rect(80, 70, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::styled("🖼", Style::default().fg(scheme.accent)),
        Line::from(""),
        Line::styled(
            reference.to_string(),
            Style::default().fg(scheme.text).bold(),
        ),
        Line::from(""),
        Line::styled(
            "any key to close",
            Style::default().fg(scheme.text_muted).italic(),
        ),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Image ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused))
                .style(Style::default().bg(scheme.background_alt)),
        );
    frame.render_widget(popup, area);
}

/// Render a help overlay from `(key, description)` rows.
pub fn render_help(frame: &mut Frame, title: &str, rows: &[(&str, &str)]) {
    let scheme = colors();
    let height = (rows.len() as u16 + 6).min(frame.area().height.saturating_sub(4));
    let area = centered_rect(60, 100, frame.area());
    let area = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height,
        ..area
    };
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (key, desc) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(scheme.accent)),
            Span::styled((*desc).to_string(), Style::default().fg(scheme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Esc close",
        Style::default().fg(scheme.text_muted).italic(),
    ));

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {title} "))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.accent))
            .style(Style::default().bg(scheme.background_alt)),
    );
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_lifecycle() {
        let mut alert = AlertState::default();
        assert!(!alert.is_open());
        alert.show("Test title required");
        assert_eq!(alert.message(), Some("Test title required"));
        alert.dismiss();
        assert!(!alert.is_open());
    }

    #[test]
    fn test_image_overlay_replaces_current() {
        let mut overlay = ImageOverlay::default();
        overlay.open("a.png");
        overlay.open("b.png");
        assert_eq!(overlay.current(), Some("b.png"));
        overlay.close();
        assert!(!overlay.is_open());
    }
}
