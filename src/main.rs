//! quizdeck: terminal quiz authoring and test-taking.
//!
//! Two screens over one JSON bank format: `author` builds tests, `run` takes
//! them against a countdown.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use quizdeck::cli;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quizdeck")]
#[command(version)]
#[command(about = "Author and take sectioned, timed multiple-choice tests in the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Build a bank interactively, exported with 'w'
    quizdeck author --out mybank.json

    # Take the tests in a bank
    quizdeck run mybank.json

    # Try the built-in sample without authoring anything
    quizdeck run

    # Write the sample bank out as a starting point
    quizdeck sample --output mybank.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive test-authoring screen
    Author {
        /// Where the 'w' key exports the bank
        #[arg(long, default_value = "tests.json")]
        out: PathBuf,
    },

    /// Open the interactive test-taking screen
    Run {
        /// Test bank to load (built-in sample when omitted)
        bank: Option<PathBuf>,
    },

    /// Emit the built-in sample bank
    Sample {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let exit_code = match cli.command {
        Commands::Author { out } => cli::run_author(out)?,
        Commands::Run { bank } => cli::run_run(bank)?,
        Commands::Sample { output } => cli::run_sample(output)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "quizdeck", &mut io::stdout());
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
