//! Authoring screen: left panel with the test list and create form, right
//! panel with the section/question editor or the read-only preview.

mod app;
mod events;
mod ui;

pub use app::{AuthorApp, Focus};
pub use ui::run_author_tui;
