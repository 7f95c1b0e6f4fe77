//! Task records and their single-line text codec
//!
//! Line formats:
//! - Pending: `{priority} {text}` (e.g., `2 hello world`)
//! - Completed: `{text}` (e.g., `hello world`)
//!
//! The priority is always the first space-separated token of a pending line,
//! so the text itself may contain digits and spaces freely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TaskError {
    #[error("Invalid priority '{0}': expected a non-negative integer")]
    InvalidPriority(String),

    #[error("Invalid index '{0}': expected a positive integer")]
    InvalidIndex(String),

    #[error("Task text must not be empty")]
    EmptyText,

    #[error("Task text must fit on a single line")]
    MultilineText,

    #[error("Malformed pending task line: '{0}'")]
    MalformedLine(String),
}

/// Parses a string made only of ASCII digits
pub(crate) fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Task priority, lower values are shown first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s)
            .map(Self)
            .ok_or_else(|| TaskError::InvalidPriority(s.to_string()))
    }
}

/// Splits a pending line at its first space into `(priority token, text)`
pub fn split_priority_and_text(line: &str) -> Option<(&str, &str)> {
    line.split_once(' ')
}

/// Formats a pending line
pub fn format_pending(priority: Priority, text: &str) -> String {
    format!("{} {}", priority, text)
}

/// Returns the priority a raw pending line sorts by, if it has a valid one
pub fn priority_key(line: &str) -> Option<Priority> {
    let (token, _) = split_priority_and_text(line)?;
    token.parse().ok()
}

fn validate_text(text: &str) -> Result<(), TaskError> {
    if text.trim().is_empty() {
        return Err(TaskError::EmptyText);
    }
    if text.contains(['\n', '\r']) {
        return Err(TaskError::MultilineText);
    }
    Ok(())
}

/// A task that has not been completed yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    pub priority: Priority,
    pub text: String,
}

impl PendingTask {
    /// Creates a pending task, rejecting text that cannot be stored on one line
    pub fn new(priority: Priority, text: impl Into<String>) -> Result<Self, TaskError> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Self { priority, text })
    }

    /// Parses a stored pending line
    pub fn from_line(line: &str) -> Result<Self, TaskError> {
        let malformed = || TaskError::MalformedLine(line.to_string());

        let (token, text) = split_priority_and_text(line).ok_or_else(malformed)?;
        let priority = token.parse().map_err(|_| malformed())?;
        if text.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            priority,
            text: text.to_string(),
        })
    }

    pub fn to_line(&self) -> String {
        format_pending(self.priority, &self.text)
    }

    /// Completes this task, dropping its priority
    pub fn complete(self) -> CompletedTask {
        CompletedTask { text: self.text }
    }
}

/// A finished task; only its text is kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub text: String,
}

impl CompletedTask {
    pub fn from_line(line: &str) -> Self {
        Self {
            text: line.to_string(),
        }
    }

    pub fn to_line(&self) -> String {
        self.text.clone()
    }
}

/// Stable-sorts pending tasks by ascending priority
pub fn sort_by_priority(tasks: &mut [PendingTask]) {
    tasks.sort_by_key(|t| t.priority);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_priority() {
        assert_eq!("0".parse::<Priority>().unwrap(), Priority::new(0));
        assert_eq!("42".parse::<Priority>().unwrap(), Priority::new(42));
    }

    #[test]
    fn reject_invalid_priority() {
        for input in ["", "-1", "+3", "1.5", "abc", " 2", "99999999999"] {
            assert_eq!(
                input.parse::<Priority>(),
                Err(TaskError::InvalidPriority(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn split_at_first_space() {
        assert_eq!(
            split_priority_and_text("2 hello world"),
            Some(("2", "hello world"))
        );
        assert_eq!(split_priority_and_text("nospace"), None);
    }

    #[test]
    fn pending_line_roundtrip() {
        let task = PendingTask::new(Priority::new(3), "buy 2 apples").unwrap();
        assert_eq!(task.to_line(), "3 buy 2 apples");
        assert_eq!(PendingTask::from_line("3 buy 2 apples").unwrap(), task);
    }

    #[test]
    fn text_with_leading_number_survives() {
        let task = PendingTask::new(Priority::new(1), "10 push-ups").unwrap();
        let parsed = PendingTask::from_line(&task.to_line()).unwrap();
        assert_eq!(parsed.priority, Priority::new(1));
        assert_eq!(parsed.text, "10 push-ups");
    }

    #[test]
    fn malformed_pending_lines() {
        for line in ["hello", "x hello", "3 ", "-1 hello"] {
            assert_eq!(
                PendingTask::from_line(line),
                Err(TaskError::MalformedLine(line.to_string()))
            );
        }
    }

    #[test]
    fn reject_unstorable_text() {
        assert_eq!(
            PendingTask::new(Priority::new(1), "  "),
            Err(TaskError::EmptyText)
        );
        assert_eq!(
            PendingTask::new(Priority::new(1), "two\nlines"),
            Err(TaskError::MultilineText)
        );
    }

    #[test]
    fn complete_drops_priority() {
        let task = PendingTask::new(Priority::new(5), "ship it").unwrap();
        let done = task.complete();
        assert_eq!(done.to_line(), "ship it");
    }

    #[test]
    fn priority_key_of_raw_lines() {
        assert_eq!(priority_key("7 text"), Some(Priority::new(7)));
        assert_eq!(priority_key("text only"), None);
        assert_eq!(priority_key(""), None);
    }

    #[test]
    fn sort_is_stable() {
        let mut tasks = vec![
            PendingTask::new(Priority::new(2), "b").unwrap(),
            PendingTask::new(Priority::new(1), "a").unwrap(),
            PendingTask::new(Priority::new(2), "c").unwrap(),
            PendingTask::new(Priority::new(1), "d").unwrap(),
        ];
        sort_by_priority(&mut tasks);

        let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "d", "b", "c"]);
    }
}
