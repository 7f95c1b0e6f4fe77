//! Plain text line storage
//!
//! Each task list is a UTF-8 file with one record per line, no header and no
//! trailing newline. Uses file locking and atomic renames so a reader never
//! sees a half-written list.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::priority_key;

/// Order in which lines are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrder {
    /// Stable sort by the leading priority token
    ByPriority,
    /// Keep the order the lines were given in
    Insertion,
}

/// Store for one newline-separated list file
#[derive(Debug, Clone)]
pub struct LineStore {
    path: PathBuf,
}

impl LineStore {
    /// Creates a new line store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file (and its parent directories) if it does not exist yet
    pub fn ensure_exists(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to create task file: {}", self.path.display()))?;

        Ok(())
    }

    /// Reads all non-blank lines from the store
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open task file: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on task file")?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .with_context(|| format!("Failed to read task file: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Writes all lines to the store (full rewrite)
    pub fn write_lines(&self, lines: &[String], order: LineOrder) -> Result<()> {
        let mut sorted: Vec<&str> = lines.iter().map(String::as_str).collect();
        if order == LineOrder::ByPriority {
            // Lines without a valid priority go last, in their original order
            sorted.sort_by_key(|line| {
                let key = priority_key(line);
                (key.is_none(), key)
            });
        }

        let temp_path = self.temp_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on task file")?;

            let mut writer = BufWriter::new(&file);
            writer
                .write_all(sorted.join("\n").as_bytes())
                .context("Failed to write task file")?;
            writer.flush().context("Failed to flush task file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
