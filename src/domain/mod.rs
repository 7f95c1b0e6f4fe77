//! Domain models for the task list
//!
//! Contains the record types and line codec without any I/O concerns.

mod index;
mod task;

pub use index::TaskIndex;
pub use task::{
    format_pending, priority_key, sort_by_priority, split_priority_and_text, CompletedTask,
    PendingTask, Priority, TaskError,
};
