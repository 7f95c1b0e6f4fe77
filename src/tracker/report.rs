//! Rendering of the pending and completed views

use serde::Serialize;

use crate::domain::{CompletedTask, PendingTask};

/// Renders sorted pending tasks as `{position}. {text} [{priority}]` lines
pub fn format_pending_list(tasks: &[PendingTask]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {} [{}]", i + 1, task.text, task.priority))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders completed tasks as `{position}. {text}` lines in stored order
pub fn format_completed_list(tasks: &[CompletedTask]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Snapshot of both lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Pending tasks, sorted by priority
    pub pending: Vec<PendingTask>,
    /// Completed tasks, oldest first
    pub completed: Vec<CompletedTask>,
}

impl Report {
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn pending_formatted(&self) -> String {
        format_pending_list(&self.pending)
    }

    pub fn completed_formatted(&self) -> String {
        format_completed_list(&self.completed)
    }
}
