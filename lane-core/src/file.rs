use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        apply_rules(&self.path(base), &self.rules(), || self.render())
    }
}

fn apply_rules(
    path: &Path,
    rules: &FileRules,
    content: impl FnOnce() -> String,
) -> Result<WriteResult> {
    let path = std::path::absolute(path)?;

    match &rules.overwrite {
        Overwrite::Always => {
            write_file(&path, &content())?;
            Ok(WriteResult::Written(path))
        }
        Overwrite::UnlessOverridden(user_file) => {
            if user_file.is_file() {
                Ok(WriteResult::Overridden(std::path::absolute(user_file)?))
            } else {
                write_file(&path, &content())?;
                Ok(WriteResult::Written(path))
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation, carrying the absolute path involved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written(PathBuf),
    /// File was not written because the user supplies their own copy (path of the user's file)
    Overridden(PathBuf),
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written(p) | WriteResult::Overridden(p) => p,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, WriteResult::Written(_))
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Always regenerate the file.
    pub fn always() -> Self {
        Self::default()
    }

    /// Regenerate the file unless the user supplies their own copy at `user_file`.
    pub fn unless_overridden(user_file: impl Into<PathBuf>) -> Self {
        Self {
            overwrite: Overwrite::UnlessOverridden(user_file.into()),
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Overwrite unless a user-authored replacement exists at the given path
    UnlessOverridden(PathBuf),
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}
