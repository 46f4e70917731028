//! Command handlers behind the CLI.

use crate::bank;
use crate::tui::{run_author_tui, run_runner_tui, AuthorApp, RunnerApp};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Run the `author` command: the interactive test-authoring screen.
pub fn run_author(out: PathBuf) -> Result<i32> {
    info!(out = %out.display(), "starting authoring screen");
    let mut app = AuthorApp::new(out);
    run_author_tui(&mut app).context("terminal error in the authoring screen")?;
    Ok(0)
}

/// Run the `run` command: the interactive test-taking screen.
///
/// Loads the bank at `bank_path`, or falls back to the built-in sample bank
/// when no path is given.
pub fn run_run(bank_path: Option<PathBuf>) -> Result<i32> {
    let tests = match &bank_path {
        Some(path) => {
            info!(bank = %path.display(), "loading test bank");
            bank::load(path)?
        }
        None => {
            info!("no bank given, using the built-in sample");
            bank::sample_tests()
        }
    };
    let mut app = RunnerApp::new(tests);
    run_runner_tui(&mut app).context("terminal error in the test-taking screen")?;
    Ok(0)
}

/// Run the `sample` command: emit the built-in sample bank, either to a file
/// or to stdout.
pub fn run_sample(output: Option<PathBuf>) -> Result<i32> {
    let tests = bank::sample_tests();
    match output {
        Some(path) => {
            bank::save(&path, &tests)?;
            info!(out = %path.display(), "sample bank written");
            println!("Sample bank written to {}", path.display());
        }
        None => {
            println!("{}", bank::to_json(&tests)?);
        }
    }
    Ok(0)
}
