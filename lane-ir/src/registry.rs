//! Sources of action descriptors.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ActionDescriptor;

/// Something that can enumerate actions in a stable order.
pub trait ActionRegistry {
    fn actions(&self) -> Vec<ActionDescriptor>;
}

/// Failure to load a registry export.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read actions from '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed action export")]
    Parse(#[from] serde_json::Error),
}

/// An in-memory list of actions.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    actions: Vec<ActionDescriptor>,
}

impl StaticRegistry {
    pub fn new(actions: Vec<ActionDescriptor>) -> Self {
        Self { actions }
    }
}

impl ActionRegistry for StaticRegistry {
    fn actions(&self) -> Vec<ActionDescriptor> {
        self.actions.clone()
    }
}

/// Actions read from a JSON export of the registry.
///
/// Accepts either a bare array of actions or `{ "actions": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonRegistry {
    actions: Vec<ActionDescriptor>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Export {
    Bare(Vec<ActionDescriptor>),
    Wrapped { actions: Vec<ActionDescriptor> },
}

impl JsonRegistry {
    pub fn open(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(json: &str) -> Result<Self, RegistryError> {
        let actions = match serde_json::from_str(json)? {
            Export::Bare(actions) => actions,
            Export::Wrapped { actions } => actions,
        };
        Ok(Self { actions })
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl ActionRegistry for JsonRegistry {
    fn actions(&self) -> Vec<ActionDescriptor> {
        self.actions.clone()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_bare_array_keeps_order() {
        let registry = JsonRegistry::parse(
            r#"[{"name": "zip", "available_options": []}, {"name": "adb"}]"#,
        )
        .unwrap();

        let names: Vec<_> = registry.actions().into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["zip", "adb"]);
    }

    #[test]
    fn test_parse_wrapped() {
        let registry = JsonRegistry::parse(r#"{"actions": [{"name": "gym"}]}"#).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            JsonRegistry::parse("{ not json"),
            Err(RegistryError::Parse(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = JsonRegistry::open(&temp.path().join("actions.json")).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }
}
