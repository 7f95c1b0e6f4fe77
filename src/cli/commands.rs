//! Command handlers
//!
//! Argument validation and every user-facing message live here. Bad input
//! is reported and the process still exits successfully; only storage
//! failures are returned as errors.

use anyhow::Result;

use super::app::USAGE;
use super::output::Output;
use crate::domain::{PendingTask, Priority, TaskIndex};
use crate::tracker::{TaskTracker, TrackerError};

pub fn help(output: &Output) {
    if output.is_json() {
        output.data(&serde_json::json!({ "usage": USAGE }));
    } else {
        println!("{}", USAGE);
    }
}

pub fn list(tracker: &TaskTracker, output: &Output) -> Result<()> {
    if output.is_json() {
        let tasks = tracker.pending()?;
        output.verbose_ctx("ls", &format!("Loaded {} pending tasks", tasks.len()));
        output.data(&indexed_pending(&tasks));
        return Ok(());
    }

    let listing = tracker.list()?;
    if listing.is_empty() {
        println!("There are no pending tasks!");
    } else {
        output.block(&listing);
    }

    Ok(())
}

pub fn report(tracker: &TaskTracker, output: &Output) -> Result<()> {
    let report = tracker.report()?;
    output.verbose_ctx(
        "report",
        &format!(
            "pending={} completed={}",
            report.pending_count(),
            report.completed_count()
        ),
    );

    if output.is_json() {
        let completed: Vec<_> = report
            .completed
            .iter()
            .enumerate()
            .map(|(i, t)| serde_json::json!({ "index": i + 1, "text": t.text }))
            .collect();

        output.data(&serde_json::json!({
            "pending": {
                "count": report.pending_count(),
                "tasks": indexed_pending(&report.pending),
            },
            "completed": {
                "count": report.completed_count(),
                "tasks": completed,
            },
        }));
    } else {
        println!("Pending : {}", report.pending_count());
        output.block(&report.pending_formatted());
        output.blank();
        println!("Completed : {}", report.completed_count());
        output.block(&report.completed_formatted());
    }

    Ok(())
}

pub fn add(
    tracker: &TaskTracker,
    output: &Output,
    priority: Option<&str>,
    words: &[String],
) -> Result<()> {
    let priority = match priority {
        Some(p) if !words.is_empty() => p,
        _ => {
            output.error("Missing tasks string. Nothing added!");
            return Ok(());
        }
    };

    let priority: Priority = match priority.parse() {
        Ok(p) => p,
        Err(e) => {
            output.error(&format!("{}. Nothing added!", e));
            return Ok(());
        }
    };

    let text = words.join(" ");
    output.verbose_ctx("add", &format!("priority={} text={:?}", priority, text));

    match tracker.add(priority, &text) {
        Ok(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "success": true,
                    "priority": task.priority,
                    "text": task.text,
                }));
            } else {
                output.success(&format!(
                    "Added task: \"{}\" with priority {}",
                    task.text, task.priority
                ));
            }
        }
        Err(TrackerError::Storage(e)) => return Err(e),
        Err(e) => output.error(&format!("{}. Nothing added!", e)),
    }

    Ok(())
}

pub fn delete(tracker: &TaskTracker, output: &Output, index: Option<&str>) -> Result<()> {
    let Some(raw) = index else {
        output.error("Missing NUMBER for deleting tasks.");
        return Ok(());
    };
    let not_found = format!("task with index #{} does not exist. Nothing deleted.", raw);

    let Ok(index) = raw.parse::<TaskIndex>() else {
        output.verbose_ctx("del", &format!("Rejected index {:?}", raw));
        output.error(&not_found);
        return Ok(());
    };

    match tracker.delete(index) {
        Ok(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "success": true,
                    "index": index,
                    "deleted": task,
                }));
            } else {
                output.success(&format!("Deleted task #{}", index));
            }
        }
        Err(TrackerError::Storage(e)) => return Err(e),
        Err(e) => {
            output.verbose_ctx("del", &e.to_string());
            output.error(&not_found);
        }
    }

    Ok(())
}

pub fn complete(tracker: &TaskTracker, output: &Output, index: Option<&str>) -> Result<()> {
    let Some(raw) = index else {
        output.error("Missing NUMBER for marking tasks as done.");
        return Ok(());
    };
    let not_found = format!("no incomplete item with index #{} exists.", raw);

    let Ok(index) = raw.parse::<TaskIndex>() else {
        output.verbose_ctx("done", &format!("Rejected index {:?}", raw));
        output.error(&not_found);
        return Ok(());
    };

    match tracker.complete(index) {
        Ok(task) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "success": true,
                    "index": index,
                    "completed": task,
                }));
            } else {
                output.success("Marked item as done.");
            }
        }
        Err(TrackerError::Storage(e)) => return Err(e),
        Err(e) => {
            output.verbose_ctx("done", &e.to_string());
            output.error(&not_found);
        }
    }

    Ok(())
}

fn indexed_pending(tasks: &[PendingTask]) -> Vec<serde_json::Value> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            serde_json::json!({
                "index": i + 1,
                "priority": t.priority,
                "text": t.text,
            })
        })
        .collect()
}
