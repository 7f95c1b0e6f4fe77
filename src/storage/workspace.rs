//! Workspace management
//!
//! Owns the pending and completed stores and makes sure both files exist
//! before any command touches them.

use std::path::PathBuf;

use anyhow::Result;

use super::{Config, LineStore};

/// The pair of files a task list lives in
#[derive(Debug, Clone)]
pub struct Workspace {
    pending: LineStore,
    completed: LineStore,
}

impl Workspace {
    /// Creates a workspace over the given files without touching the disk
    pub fn new(pending: impl Into<PathBuf>, completed: impl Into<PathBuf>) -> Self {
        Self {
            pending: LineStore::new(pending),
            completed: LineStore::new(completed),
        }
    }

    /// Opens the workspace described by the configuration, creating empty files if missing
    pub fn open(config: &Config) -> Result<Self> {
        let workspace = Self::new(&config.pending_file, &config.completed_file);
        workspace.bootstrap()?;
        Ok(workspace)
    }

    /// Creates both files if they do not exist yet
    pub fn bootstrap(&self) -> Result<()> {
        self.pending.ensure_exists()?;
        self.completed.ensure_exists()
    }

    /// Returns the pending task store
    pub fn pending(&self) -> &LineStore {
        &self.pending
    }

    /// Returns the completed task store
    pub fn completed(&self) -> &LineStore {
        &self.completed
    }
}
