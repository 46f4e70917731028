//! Application state for the test-taking screen.

use crate::model::Test;
use crate::runner::{Phase, Session};
use crate::tui::overlay::{AlertState, ImageOverlay};
use std::time::{Duration, Instant};

/// Wall-clock countdown source.
///
/// The session itself only understands one-second ticks; this clock converts
/// elapsed wall time into that many ticks, carrying the sub-second remainder
/// so 250ms polling never drifts. Disarming it is the cancellation step on
/// submission and teardown.
#[derive(Debug, Default)]
pub struct CountdownClock {
    armed_at: Option<Instant>,
}

impl CountdownClock {
    /// Start counting from now.
    pub fn arm(&mut self) {
        self.armed_at = Some(Instant::now());
    }

    /// Stop counting; pending partial seconds are discarded.
    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Whole seconds elapsed since the last drain.
    ///
    /// Advances the reference point by exactly that many seconds, keeping
    /// the remainder for the next call.
    pub fn drain_seconds(&mut self) -> u64 {
        let Some(last) = self.armed_at else {
            return 0;
        };
        let elapsed = whole_seconds(last.elapsed());
        if elapsed > 0 {
            self.armed_at = Some(last + Duration::from_secs(elapsed));
        }
        elapsed
    }
}

fn whole_seconds(elapsed: Duration) -> u64 {
    elapsed.as_secs()
}

/// Main application state for the test-taking screen.
pub struct RunnerApp {
    /// The attempt state machine.
    pub(crate) session: Session,

    /// Highlighted test while browsing.
    pub(crate) browse_cursor: usize,

    /// Highlighted option on the question on screen; Enter picks it.
    pub(crate) option_cursor: usize,

    /// Countdown source, armed only while an attempt is in progress.
    pub(crate) clock: CountdownClock,

    /// Blocking alert.
    pub(crate) alert: AlertState,

    /// Full-screen image viewer.
    pub(crate) image_overlay: ImageOverlay,

    /// Show help overlay.
    pub(crate) show_help: bool,

    /// Should quit.
    pub(crate) should_quit: bool,
}

impl RunnerApp {
    /// Create a runner over a loaded bank, starting in the browse list.
    #[must_use]
    pub fn new(tests: Vec<Test>) -> Self {
        Self {
            session: Session::new(tests),
            browse_cursor: 0,
            option_cursor: 0,
            clock: CountdownClock::default(),
            alert: AlertState::default(),
            image_overlay: ImageOverlay::default(),
            show_help: false,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    // ------------------------------------------------------------------
    // Browsing
    // ------------------------------------------------------------------

    pub(crate) fn browse_up(&mut self) {
        self.browse_cursor = self.browse_cursor.saturating_sub(1);
    }

    pub(crate) fn browse_down(&mut self) {
        let len = self.session.tests().len();
        if len > 0 && self.browse_cursor + 1 < len {
            self.browse_cursor += 1;
        }
    }

    /// Enter on the browse list: start the highlighted test and arm the
    /// countdown.
    pub(crate) fn start_selected(&mut self) {
        match self.session.start(self.browse_cursor) {
            Ok(()) => {
                self.option_cursor = 0;
                self.clock.arm();
            }
            Err(err) => self.alert.show(err.to_string()),
        }
    }

    // ------------------------------------------------------------------
    // Attempt
    // ------------------------------------------------------------------

    /// Record the nth option (0-based) for the question on screen.
    pub(crate) fn select_option(&mut self, option_index: usize) {
        let id = self.session.current_question().map(|q| q.id);
        if let Some(id) = id {
            self.session.select_answer(id, option_index);
        }
    }

    pub(crate) fn option_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    pub(crate) fn option_down(&mut self) {
        let count = self
            .session
            .current_question()
            .map_or(0, |q| q.options.len());
        if count > 0 && self.option_cursor + 1 < count {
            self.option_cursor += 1;
        }
    }

    /// Enter during an attempt: pick the highlighted option.
    pub(crate) fn select_cursor_option(&mut self) {
        self.select_option(self.option_cursor);
    }

    pub(crate) fn submit_now(&mut self) {
        self.session.submit();
        self.clock.disarm();
    }

    pub(crate) fn reattempt_now(&mut self) {
        self.session.reattempt();
        if self.session.phase() == Phase::InProgress {
            self.option_cursor = 0;
            self.clock.arm();
        }
    }

    /// `i`: open the current question's image, if any.
    pub(crate) fn open_current_image(&mut self) {
        let image = self
            .session
            .current_question()
            .and_then(|q| q.image.clone());
        if let Some(reference) = image {
            self.image_overlay.open(reference);
        }
    }

    /// Drive the countdown from a poll tick.
    ///
    /// Converts elapsed wall time into session ticks; a forced submission
    /// mid-drain disarms the clock and stops.
    pub(crate) fn advance_clock(&mut self) {
        if self.session.phase() != Phase::InProgress {
            self.clock.disarm();
            return;
        }
        for _ in 0..self.clock.drain_seconds() {
            if self.session.tick() {
                self.clock.disarm();
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::sample_tests;

    fn app() -> RunnerApp {
        RunnerApp::new(sample_tests())
    }

    #[test]
    fn test_whole_seconds() {
        assert_eq!(whole_seconds(Duration::from_millis(999)), 0);
        assert_eq!(whole_seconds(Duration::from_millis(1000)), 1);
        assert_eq!(whole_seconds(Duration::from_millis(2750)), 2);
    }

    #[test]
    fn test_clock_drains_nothing_when_disarmed() {
        let mut clock = CountdownClock::default();
        assert!(!clock.is_armed());
        assert_eq!(clock.drain_seconds(), 0);
        clock.arm();
        assert!(clock.is_armed());
        // Freshly armed: under a second elapsed.
        assert_eq!(clock.drain_seconds(), 0);
        clock.disarm();
        assert!(!clock.is_armed());
    }

    #[test]
    fn test_start_selected_arms_clock() {
        let mut app = app();
        app.start_selected();
        assert_eq!(app.session().phase(), Phase::InProgress);
        assert!(app.clock.is_armed());
    }

    #[test]
    fn test_submit_disarms_clock() {
        let mut app = app();
        app.start_selected();
        app.submit_now();
        assert!(app.session().is_submitted());
        assert!(!app.clock.is_armed());
    }

    #[test]
    fn test_reattempt_rearms_clock() {
        let mut app = app();
        app.start_selected();
        app.submit_now();
        app.reattempt_now();
        assert_eq!(app.session().phase(), Phase::InProgress);
        assert!(app.clock.is_armed());
    }

    #[test]
    fn test_advance_clock_disarms_outside_attempt() {
        let mut app = app();
        app.clock.arm();
        app.advance_clock();
        assert!(!app.clock.is_armed());
    }

    #[test]
    fn test_select_option_targets_current_question() {
        let mut app = app();
        app.start_selected();
        let id = app.session().current_question().unwrap().id;
        app.select_option(1);
        assert_eq!(app.session().answers().selected(id), Some(1));
    }

    #[test]
    fn test_browse_cursor_clamps() {
        let mut app = app();
        app.browse_up();
        assert_eq!(app.browse_cursor, 0);
        let len = app.session().tests().len();
        for _ in 0..20 {
            app.browse_down();
        }
        assert_eq!(app.browse_cursor, len - 1);
    }
}
