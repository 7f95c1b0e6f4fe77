//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use super::commands;
use super::output::{Output, OutputFormat};
use crate::storage::{Config, Workspace};
use crate::tracker::TaskTracker;

pub const USAGE: &str = r#"Usage :-
$ ./task add 2 hello world    # Add a new item with priority 2 and text "hello world" to the list
$ ./task ls                   # Show incomplete priority list items sorted by priority in ascending order
$ ./task del INDEX            # Delete the incomplete item with the given index
$ ./task done INDEX           # Mark the incomplete item with the given index as complete
$ ./task help                 # Show usage
$ ./task report               # Statistics"#;

#[derive(Parser)]
#[command(name = "task")]
#[command(version, about = "A priority-ordered personal task list")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, env = "TASK_CONFIG")]
    pub config: Option<PathBuf>,

    /// File holding pending tasks
    #[arg(long, global = true, env = "TASK_PENDING_FILE")]
    pub pending_file: Option<PathBuf>,

    /// File holding completed tasks
    #[arg(long, global = true, env = "TASK_COMPLETED_FILE")]
    pub completed_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Arguments are taken as raw strings so that bad input produces a message
// instead of a clap usage error.
#[derive(Subcommand)]
pub enum Commands {
    /// Show usage
    Help,

    /// Show pending tasks sorted by priority
    Ls,

    /// Show pending and completed tasks with counts
    Report,

    /// Add a task: `task add 2 hello world`
    Add {
        /// Priority (non-negative integer, lower comes first)
        #[arg(allow_hyphen_values = true)]
        priority: Option<String>,

        /// Task text; every word after the priority is kept, including ones
        /// that look like flags, so put global flags before `add`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete the pending task with the given index
    Del {
        /// Index as shown by `task ls`
        #[arg(allow_hyphen_values = true)]
        index: Option<String>,
    },

    /// Mark the pending task with the given index as done
    Done {
        /// Index as shown by `task ls`
        #[arg(allow_hyphen_values = true)]
        index: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    let config = Config::load(cli.config.as_deref())?
        .with_overrides(cli.pending_file, cli.completed_file);
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    output.verbose_ctx(
        "config",
        &format!(
            "pending={} completed={}",
            config.pending_file.display(),
            config.completed_file.display()
        ),
    );

    let tracker = TaskTracker::new(Workspace::open(&config)?);

    match cli.command {
        None | Some(Commands::Help) => commands::help(&output),
        Some(Commands::Ls) => commands::list(&tracker, &output)?,
        Some(Commands::Report) => commands::report(&tracker, &output)?,
        Some(Commands::Add { priority, text }) => {
            commands::add(&tracker, &output, priority.as_deref(), &text)?
        }
        Some(Commands::Del { index }) => commands::delete(&tracker, &output, index.as_deref())?,
        Some(Commands::Done { index }) => {
            commands::complete(&tracker, &output, index.as_deref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Reports a command-line usage error without failing the process
fn usage_error(e: clap::Error) -> Result<()> {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        e.print()?;
        return Ok(());
    }

    let rendered = e.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");

    Output::new(OutputFormat::Text, false).error(message);
    println!("{}", USAGE);
    Ok(())
}
