//! Switching the build project between generated and user-authored tool files.

use std::path::{Component, Path, PathBuf};

use lanebridge_ir::{ToolCatalog, ToolConfig};

use crate::{BuildProject, ProjectError};

/// Directories the project references are computed between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideLayout {
    /// Directory holding the build project file; references are relative to it.
    pub project_dir: PathBuf,
    /// Where generated adapters are written.
    pub output_dir: PathBuf,
    /// Where user-authored replacements live.
    pub config_dir: PathBuf,
}

impl OverrideLayout {
    pub fn new(
        project_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        config_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            output_dir: output_dir.into(),
            config_dir: config_dir.into(),
        }
    }
}

/// Where one tool's adapter can live, and how the project refers to each place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileMapping {
    /// Adapter file name, e.g. `Gymfile.swift`.
    pub file_name: String,
    /// User-authored files that replace the generated adapter, first match wins.
    pub user_candidates: Vec<PathBuf>,
    /// Project reference to the generated adapter.
    pub default_reference: String,
    /// Project reference to the user's file.
    pub override_reference: String,
}

impl ConfigFileMapping {
    /// The mapping of a catalog tool within `layout`.
    pub fn for_tool(tool: &ToolConfig, layout: &OverrideLayout) -> Self {
        let file_name = format!("{}.swift", tool.class_name());
        let generated = layout.output_dir.join(&file_name);
        let user = layout.config_dir.join(&file_name);
        Self {
            default_reference: relative_reference(&layout.project_dir, &generated),
            override_reference: relative_reference(&layout.project_dir, &user),
            user_candidates: vec![user],
            file_name,
        }
    }

    /// The user-authored file currently on disk, if any.
    pub fn user_file(&self) -> Option<&Path> {
        self.user_candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.is_file())
    }
}

/// `target` as seen from `dir`, with `/` separators.
///
/// Both paths must share a base (both absolute, or both relative to the same directory).
fn relative_reference(dir: &Path, target: &Path) -> String {
    let from = lexical_components(dir);
    let to = lexical_components(target);
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts = vec!["..".to_string(); from.len() - common];
    parts.extend(
        to[common..]
            .iter()
            .map(|component| component.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}

fn lexical_components(path: &Path) -> Vec<Component<'_>> {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if matches!(components.last(), Some(Component::Normal(_))) => {
                components.pop();
            }
            other => components.push(other),
        }
    }
    components
}

/// Keeps the project pointing at the user's tool file whenever one exists.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrideResolver {
    mappings: Vec<ConfigFileMapping>,
}

impl ConfigOverrideResolver {
    pub fn new(mappings: Vec<ConfigFileMapping>) -> Self {
        Self { mappings }
    }

    /// One mapping per catalog tool.
    pub fn for_catalog(catalog: &ToolCatalog, layout: &OverrideLayout) -> Self {
        Self::new(
            catalog
                .iter()
                .map(|tool| ConfigFileMapping::for_tool(tool, layout))
                .collect(),
        )
    }

    pub fn mappings(&self) -> &[ConfigFileMapping] {
        &self.mappings
    }

    /// Swap project references to match what is on disk, without saving.
    ///
    /// Returns whether any reference changed.
    pub fn resolve<P: BuildProject + ?Sized>(&self, project: &mut P) -> bool {
        let mut modified = false;

        for mapping in &self.mappings {
            let (from, to) = match mapping.user_file() {
                Some(_) => (&mapping.default_reference, &mapping.override_reference),
                None => (&mapping.override_reference, &mapping.default_reference),
            };

            if project.swap_reference(from, to) {
                tracing::debug!(file = %mapping.file_name, from = %from, to = %to, "swapped project reference");
                modified = true;
            }
        }

        modified
    }

    /// [`resolve`](Self::resolve) and save the project when something changed.
    pub fn apply<P: BuildProject + ?Sized>(&self, project: &mut P) -> Result<bool, ProjectError> {
        let modified = self.resolve(project);
        if modified {
            project.save()?;
        }
        Ok(modified)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tempfile::TempDir;

    use super::*;

    #[derive(Default)]
    struct MemoryProject {
        sources: Vec<String>,
        saves: Cell<usize>,
    }

    impl BuildProject for MemoryProject {
        fn source_references(&self) -> Vec<String> {
            self.sources.clone()
        }

        fn swap_reference(&mut self, from: &str, to: &str) -> bool {
            match self.sources.iter().position(|s| s == from) {
                Some(i) => {
                    self.sources[i] = to.to_string();
                    true
                }
                None => false,
            }
        }

        fn save(&self) -> Result<(), ProjectError> {
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    /// Project in `fastlane/swift/Runner`, adapters in `fastlane/swift`, overrides in `fastlane`.
    fn nested_layout(base: &Path) -> OverrideLayout {
        OverrideLayout::new(
            base.join("fastlane/swift/Runner"),
            base.join("fastlane/swift"),
            base.join("fastlane"),
        )
    }

    #[test]
    fn test_mapping_paths() {
        let tool = ToolConfig::from_config_file("Gymfile");
        let mapping = ConfigFileMapping::for_tool(&tool, &nested_layout(Path::new("")));

        assert_eq!(mapping.user_candidates, [PathBuf::from("fastlane/Gymfile.swift")]);
        assert_eq!(mapping.default_reference, "../Gymfile.swift");
        assert_eq!(mapping.override_reference, "../../Gymfile.swift");
    }

    #[test]
    fn test_mapping_paths_for_sibling_project() {
        let layout = OverrideLayout::new(
            "/repo/fastlane/LaneRunner",
            "/repo/fastlane/swift",
            "/repo/fastlane",
        );
        let mapping =
            ConfigFileMapping::for_tool(&ToolConfig::from_config_file("Gymfile"), &layout);

        assert_eq!(mapping.default_reference, "../swift/Gymfile.swift");
        assert_eq!(mapping.override_reference, "../Gymfile.swift");
    }

    #[test]
    fn test_relative_reference() {
        assert_eq!(relative_reference(Path::new("a/b"), Path::new("a/b/c.swift")), "c.swift");
        assert_eq!(relative_reference(Path::new("a/./b"), Path::new("a/c.swift")), "../c.swift");
        assert_eq!(
            relative_reference(Path::new("/x/y/z"), Path::new("/x/q/../w.swift")),
            "../../w.swift"
        );
    }

    #[test]
    fn test_save_only_when_modified() {
        let temp = TempDir::new().unwrap();
        let layout = nested_layout(temp.path());
        let resolver = ConfigOverrideResolver::for_catalog(&ToolCatalog::defaults(), &layout);
        let mut project = MemoryProject {
            sources: vec!["../Gymfile.swift".into()],
            ..Default::default()
        };

        assert!(!resolver.apply(&mut project).unwrap());
        assert_eq!(project.saves.get(), 0);

        std::fs::create_dir_all(temp.path().join("fastlane")).unwrap();
        std::fs::write(temp.path().join("fastlane/Gymfile.swift"), "").unwrap();
        assert!(resolver.apply(&mut project).unwrap());
        assert_eq!(project.saves.get(), 1);
        assert_eq!(project.sources, ["../../Gymfile.swift"]);
    }

    #[test]
    fn test_unreferenced_tools_are_left_alone() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("fastlane")).unwrap();
        std::fs::write(temp.path().join("fastlane/Scanfile.swift"), "").unwrap();
        let layout = nested_layout(temp.path());
        let resolver = ConfigOverrideResolver::for_catalog(&ToolCatalog::defaults(), &layout);
        let mut project = MemoryProject {
            sources: vec!["../Actions.swift".into()],
            ..Default::default()
        };

        assert!(!resolver.resolve(&mut project));
        assert_eq!(project.sources, ["../Actions.swift"]);
    }

    #[test]
    fn test_directory_is_not_a_user_file() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("fastlane/Gymfile.swift")).unwrap();
        let mapping = ConfigFileMapping::for_tool(
            &ToolConfig::from_config_file("Gymfile"),
            &nested_layout(temp.path()),
        );
        assert!(mapping.user_file().is_none());
    }
}
