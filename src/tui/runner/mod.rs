//! Test-taking screen: browse the bank, run a timed attempt, review the
//! graded result.

mod app;
mod events;
mod ui;

pub use app::{CountdownClock, RunnerApp};
pub use ui::run_runner_tui;
