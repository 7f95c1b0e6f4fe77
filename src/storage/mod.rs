//! # Storage Layer
//!
//! Persistence for the two task lists as plain text files.
//!
//! ## Storage Formats
//!
//! | Data | Format | Default location |
//! |------|--------|------------------|
//! | Pending tasks | `{priority} {text}` per line | `./task.txt` |
//! | Completed tasks | `{text}` per line | `./completed.txt` |
//! | Config | TOML | `{config_dir}/task-cli/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`LineStore`] takes `fs2` locks while reading and writing
//! - All writes are atomic (temp file + rename)
//! - A read-modify-write cycle is not locked as a whole; the tool is single-user
//!
//! ## Key Types
//!
//! - [`Workspace`] - Entry point holding both stores
//! - [`LineStore`] - Read/write one list file
//! - [`Config`] - File locations and output defaults

mod config;
mod lines;
mod workspace;

pub use config::{Config, ConfigError, OutputFormat};
pub use lines::{LineOrder, LineStore};
pub use workspace::Workspace;
