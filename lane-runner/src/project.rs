//! The build project: the runner target's list of source references.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ProjectError;

/// A build project whose source list can be rewritten in place.
pub trait BuildProject {
    /// Source references of the runner target, in project order.
    fn source_references(&self) -> Vec<String>;

    /// Replace `from` with `to`; `false` when `from` is not referenced.
    fn swap_reference(&mut self, from: &str, to: &str) -> bool;

    /// Persist the project.
    fn save(&self) -> Result<(), ProjectError>;

    fn references(&self, path: &str) -> bool {
        self.source_references().iter().any(|r| r == path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectFile {
    target: Target,
    #[serde(flatten)]
    rest: toml::Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Target {
    name: String,
    #[serde(default)]
    sources: Vec<String>,
    #[serde(flatten)]
    rest: toml::Table,
}

/// A TOML project file:
///
/// ```toml
/// [target]
/// name = "LaneRunner"
/// sources = ["../Actions.swift", "../Gymfile.swift"]
/// ```
///
/// Keys other than `target.sources` are preserved when saving.
#[derive(Debug, Clone)]
pub struct TomlProject {
    path: PathBuf,
    file: ProjectFile,
}

impl TomlProject {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = toml::from_str(&content).map_err(|source| ProjectError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// A new, unsaved project.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            path: path.into(),
            file: ProjectFile {
                target: Target {
                    name: name.into(),
                    sources,
                    rest: toml::Table::new(),
                },
                rest: toml::Table::new(),
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.file.target.name
    }
}

impl BuildProject for TomlProject {
    fn source_references(&self) -> Vec<String> {
        self.file.target.sources.clone()
    }

    fn swap_reference(&mut self, from: &str, to: &str) -> bool {
        match self.file.target.sources.iter_mut().find(|s| s.as_str() == from) {
            Some(source) => {
                *source = to.to_string();
                true
            }
            None => false,
        }
    }

    fn save(&self) -> Result<(), ProjectError> {
        let content = toml::to_string_pretty(&self.file)?;
        std::fs::write(&self.path, content).map_err(|source| ProjectError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
