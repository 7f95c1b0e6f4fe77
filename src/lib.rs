//! task-cli - a personal task list kept in two plain text files
//!
//! Pending tasks carry a priority and are always shown sorted by it;
//! completing a task moves its text to a second, append-only list.

pub mod cli;
pub mod domain;
pub mod storage;
pub mod tracker;

pub use domain::{CompletedTask, PendingTask, Priority, TaskIndex};
pub use storage::{Config, Workspace};
pub use tracker::{Report, TaskTracker, TrackerError};
