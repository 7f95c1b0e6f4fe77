//! # Task Tracker
//!
//! The list operations behind every command: add, list, delete, complete and
//! report. A [`TaskTracker`] is built once per invocation over a
//! [`Workspace`] and reads the files fresh for each operation, so positions
//! always refer to the current priority-sorted pending list.
//!
//! ## Completing a task
//!
//! `complete` touches both files. The completed list is appended first and
//! the pending list is rewritten second, so a failure between the two writes
//! leaves the task listed twice instead of losing it.

mod report;

pub use report::{format_completed_list, format_pending_list, Report};

use anyhow::Context;
use thiserror::Error;

use crate::domain::{sort_by_priority, CompletedTask, PendingTask, Priority, TaskError, TaskIndex};
use crate::storage::{LineOrder, Workspace};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("No task at index #{index} (list has {len})")]
    NotFound { index: TaskIndex, len: usize },

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type Result<T, E = TrackerError> = std::result::Result<T, E>;

/// List operations over a workspace
pub struct TaskTracker {
    workspace: Workspace,
}

impl TaskTracker {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    /// Adds a pending task
    pub fn add(&self, priority: Priority, text: &str) -> Result<PendingTask> {
        let task = PendingTask::new(priority, text)?;

        let mut tasks = self.pending()?;
        tasks.push(task.clone());
        self.save_pending(&tasks)?;

        Ok(task)
    }

    /// Returns pending tasks sorted by priority, ties in file order
    pub fn pending(&self) -> Result<Vec<PendingTask>> {
        let store = self.workspace.pending();

        let mut tasks = store
            .read_lines()?
            .iter()
            .enumerate()
            .map(|(i, line)| {
                PendingTask::from_line(line).with_context(|| {
                    format!("Bad record {} in {}", i + 1, store.path().display())
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        sort_by_priority(&mut tasks);
        Ok(tasks)
    }

    /// Returns completed tasks in the order they were completed
    pub fn completed(&self) -> Result<Vec<CompletedTask>> {
        let lines = self.workspace.completed().read_lines()?;
        Ok(lines.iter().map(|line| CompletedTask::from_line(line)).collect())
    }

    /// Renders the pending list, empty when there is nothing to do
    pub fn list(&self) -> Result<String> {
        Ok(format_pending_list(&self.pending()?))
    }

    /// Deletes the pending task shown at `index`
    pub fn delete(&self, index: TaskIndex) -> Result<PendingTask> {
        let mut tasks = self.pending()?;
        let offset = resolve(index, tasks.len())?;

        let removed = tasks.remove(offset);
        self.save_pending(&tasks)?;

        Ok(removed)
    }

    /// Moves the pending task shown at `index` to the completed list
    pub fn complete(&self, index: TaskIndex) -> Result<CompletedTask> {
        let mut tasks = self.pending()?;
        let offset = resolve(index, tasks.len())?;

        let done = tasks.remove(offset).complete();

        let completed_store = self.workspace.completed();
        let mut completed = completed_store.read_lines()?;
        completed.push(done.to_line());
        completed_store.write_lines(&completed, LineOrder::Insertion)?;

        self.save_pending(&tasks)?;

        Ok(done)
    }

    /// Collects both lists
    pub fn report(&self) -> Result<Report> {
        Ok(Report {
            pending: self.pending()?,
            completed: self.completed()?,
        })
    }

    fn save_pending(&self, tasks: &[PendingTask]) -> Result<()> {
        let lines: Vec<String> = tasks.iter().map(PendingTask::to_line).collect();
        self.workspace
            .pending()
            .write_lines(&lines, LineOrder::ByPriority)?;
        Ok(())
    }
}

fn resolve(index: TaskIndex, len: usize) -> Result<usize> {
    index
        .offset_in(len)
        .ok_or(TrackerError::NotFound { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, TaskTracker) {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(
            dir.path().join("task.txt"),
            dir.path().join("completed.txt"),
        );
        workspace.bootstrap().unwrap();
        (dir, TaskTracker::new(workspace))
    }

    fn index(position: usize) -> TaskIndex {
        TaskIndex::new(position).unwrap()
    }

    fn read(dir: &TempDir, name: &str) -> String {
        fs::read_to_string(dir.path().join(name)).unwrap()
    }

    #[test]
    fn list_sorted_by_priority() {
        let (_dir, tracker) = setup();

        tracker.add(Priority::new(2), "hello world").unwrap();
        tracker.add(Priority::new(1), "urgent fix").unwrap();

        assert_eq!(
            tracker.list().unwrap(),
            "1. urgent fix [1]\n2. hello world [2]"
        );
    }

    #[test]
    fn list_empty() {
        let (_dir, tracker) = setup();

        assert_eq!(tracker.list().unwrap(), "");
    }

    #[test]
    fn add_persists_sorted() {
        let (dir, tracker) = setup();

        tracker.add(Priority::new(5), "later").unwrap();
        tracker.add(Priority::new(0), "now").unwrap();

        assert_eq!(read(&dir, "task.txt"), "0 now\n5 later");
    }

    #[test]
    fn add_rejects_empty_text() {
        let (dir, tracker) = setup();

        let err = tracker.add(Priority::new(1), "").unwrap_err();

        assert!(matches!(err, TrackerError::Task(TaskError::EmptyText)));
        assert_eq!(read(&dir, "task.txt"), "");
    }

    #[test]
    fn delete_by_sorted_position() {
        let (_dir, tracker) = setup();
        tracker.add(Priority::new(3), "c").unwrap();
        tracker.add(Priority::new(1), "a").unwrap();
        tracker.add(Priority::new(2), "b").unwrap();

        let removed = tracker.delete(index(2)).unwrap();

        assert_eq!(removed.text, "b");
        assert_eq!(tracker.list().unwrap(), "1. a [1]\n2. c [3]");
    }

    #[test]
    fn delete_out_of_range_leaves_file_alone() {
        let (dir, tracker) = setup();
        tracker.add(Priority::new(2), "hello world").unwrap();
        tracker.add(Priority::new(1), "urgent fix").unwrap();
        let before = read(&dir, "task.txt");

        let err = tracker.delete(index(5)).unwrap_err();

        assert!(matches!(err, TrackerError::NotFound { len: 2, .. }));
        assert_eq!(read(&dir, "task.txt"), before);
        assert_eq!(tracker.pending().unwrap().len(), 2);
    }

    #[test]
    fn delete_on_empty_list() {
        let (_dir, tracker) = setup();

        let err = tracker.delete(index(1)).unwrap_err();

        assert!(matches!(err, TrackerError::NotFound { len: 0, .. }));
    }

    #[test]
    fn complete_moves_text_without_priority() {
        let (dir, tracker) = setup();
        tracker.add(Priority::new(2), "hello world").unwrap();
        tracker.add(Priority::new(1), "urgent fix").unwrap();

        let done = tracker.complete(index(1)).unwrap();

        assert_eq!(done.text, "urgent fix");
        assert_eq!(tracker.list().unwrap(), "1. hello world [2]");
        assert_eq!(read(&dir, "completed.txt"), "urgent fix");
    }

    #[test]
    fn completed_keeps_insertion_order() {
        let (_dir, tracker) = setup();
        tracker.add(Priority::new(1), "zeta").unwrap();
        tracker.add(Priority::new(2), "alpha").unwrap();
        tracker.add(Priority::new(3), "mid").unwrap();

        tracker.complete(index(3)).unwrap();
        tracker.complete(index(1)).unwrap();
        tracker.complete(index(1)).unwrap();

        let report = tracker.report().unwrap();
        assert_eq!(report.completed_formatted(), "1. mid\n2. zeta\n3. alpha");
        assert_eq!(report.pending_count(), 0);
    }

    #[test]
    fn complete_out_of_range_touches_nothing() {
        let (dir, tracker) = setup();
        tracker.add(Priority::new(1), "only").unwrap();
        let pending_before = read(&dir, "task.txt");

        let err = tracker.complete(index(2)).unwrap_err();

        assert!(matches!(err, TrackerError::NotFound { .. }));
        assert_eq!(read(&dir, "task.txt"), pending_before);
        assert_eq!(read(&dir, "completed.txt"), "");
    }

    #[test]
    fn report_counts_both_lists() {
        let (_dir, tracker) = setup();
        tracker.add(Priority::new(2), "hello world").unwrap();
        tracker.add(Priority::new(1), "urgent fix").unwrap();
        tracker.complete(index(1)).unwrap();

        let report = tracker.report().unwrap();

        assert_eq!(report.pending_count(), 1);
        assert_eq!(report.pending_formatted(), "1. hello world [2]");
        assert_eq!(report.completed_count(), 1);
        assert_eq!(report.completed_formatted(), "1. urgent fix");
    }

    #[test]
    fn report_on_empty_lists() {
        let (_dir, tracker) = setup();

        let report = tracker.report().unwrap();

        assert_eq!(report.pending_count(), 0);
        assert_eq!(report.completed_count(), 0);
    }

    #[test]
    fn reads_unsorted_hand_edited_file() {
        let (dir, tracker) = setup();
        fs::write(dir.path().join("task.txt"), "3 c\r\n1 a\n2 b").unwrap();

        assert_eq!(tracker.list().unwrap(), "1. a [1]\n2. b [2]\n3. c [3]");
    }

    #[test]
    fn malformed_pending_line_is_a_storage_error() {
        let (dir, tracker) = setup();
        fs::write(dir.path().join("task.txt"), "1 fine\nnot a task").unwrap();

        let err = tracker.list().unwrap_err();

        assert!(matches!(err, TrackerError::Storage(_)));
        assert!(err.to_string().contains("Bad record 2"));
    }

    #[test]
    fn complete_appends_before_rewriting_pending() {
        let (dir, tracker) = setup();
        tracker.add(Priority::new(1), "keep").unwrap();
        // Block the pending rewrite: its temp file path is taken by a directory
        fs::create_dir(dir.path().join("task.txt.tmp")).unwrap();

        let err = tracker.complete(index(1)).unwrap_err();

        assert!(matches!(err, TrackerError::Storage(_)));
        assert_eq!(read(&dir, "task.txt"), "1 keep");
        assert_eq!(read(&dir, "completed.txt"), "keep");
    }

    #[test]
    fn missing_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let tracker = TaskTracker::new(Workspace::new(
            dir.path().join("task.txt"),
            dir.path().join("completed.txt"),
        ));

        assert!(matches!(
            tracker.pending().unwrap_err(),
            TrackerError::Storage(_)
        ));
    }

    proptest! {
        #[test]
        fn list_is_stable_priority_order(
            entries in prop::collection::vec((0u32..4, "[a-z]{1,6}"), 0..10)
        ) {
            let (_dir, tracker) = setup();
            for (priority, text) in &entries {
                tracker.add(Priority::new(*priority), text).unwrap();
            }

            let mut expected: Vec<_> = entries.clone();
            expected.sort_by_key(|(priority, _)| *priority);

            let actual: Vec<_> = tracker
                .pending()
                .unwrap()
                .into_iter()
                .map(|t| (t.priority.value(), t.text))
                .collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn delete_keeps_relative_order_of_others(
            entries in prop::collection::vec((0u32..4, "[a-z]{1,6}"), 1..8),
            pick in any::<prop::sample::Index>()
        ) {
            let (_dir, tracker) = setup();
            for (priority, text) in &entries {
                tracker.add(Priority::new(*priority), text).unwrap();
            }
            let mut before = tracker.pending().unwrap();
            let offset = pick.index(before.len());

            let removed = tracker.delete(index(offset + 1)).unwrap();

            prop_assert_eq!(&removed, &before.remove(offset));
            prop_assert_eq!(tracker.pending().unwrap(), before);
        }
    }
}
