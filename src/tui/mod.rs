//! Terminal UI built on ratatui.
//!
//! Two distinct screens are available, mirroring the two state machines:
//! - `AuthorApp` - test authoring (create tests, sections, questions, preview)
//! - `RunnerApp` - test taking (browse, timed attempt, grading view)
//!
//! The screens share the theme, the event handler, and the overlay types
//! (blocking alerts and the single-image viewer). They never share data at
//! runtime; a JSON bank file is the only hand-off between them.

pub mod author;
mod events;
pub mod overlay;
pub mod runner;
pub mod theme;
pub mod widgets;

pub use author::{run_author_tui, AuthorApp};
pub use events::{Event, EventHandler};
pub use overlay::{AlertState, ImageOverlay};
pub use runner::{run_runner_tui, RunnerApp};
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Theme};
