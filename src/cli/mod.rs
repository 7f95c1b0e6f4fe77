//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `add PRIORITY TEXT...` | Add a pending task |
//! | `ls` | List pending tasks by priority |
//! | `del INDEX` | Delete a pending task |
//! | `done INDEX` | Move a pending task to the completed list |
//! | `report` | Counts and both lists |
//! | `help` | Usage |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod commands;
mod output;

pub use app::{run, Cli, Commands, USAGE};
pub use output::{Output, OutputFormat};
