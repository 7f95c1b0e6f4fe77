//! 1-based positions into the priority-sorted pending list

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::task::{parse_digits, TaskError};

/// A 1-based position as shown by `task ls`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskIndex(usize);

impl TaskIndex {
    /// Creates an index, returning `None` for zero
    pub fn new(position: usize) -> Option<Self> {
        (position > 0).then_some(Self(position))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Resolves to a 0-based offset into a list of `len` items
    pub fn offset_in(&self, len: usize) -> Option<usize> {
        (self.0 <= len).then(|| self.0 - 1)
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskIndex {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s)
            .and_then(Self::new)
            .ok_or_else(|| TaskError::InvalidIndex(s.to_string()))
    }
}
