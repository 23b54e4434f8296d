//! Manifest types for lanebridge.toml.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use lanebridge_ir::{IgnoreRules, ToolCatalog};
use serde::Deserialize;

/// Root manifest for lanebridge.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub codegen: CodegenConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    /// Extra option exclusions per action, merged with the defaults.
    #[serde(default)]
    pub ignore: IndexMap<String, Vec<String>>,

    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub(crate) root: PathBuf,
}

/// `[runner]`: the compiled lane runner and how to build it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Working directory for the build command and the runner process.
    pub dir: PathBuf,
    /// Build project file listing the runner's sources.
    pub project: PathBuf,
    /// Compiled runner binary.
    pub artifact: PathBuf,
    /// Entry lane script; the artifact is stale when it is older.
    pub entry: PathBuf,
    /// Shell command building the runner; `{project}` is replaced by the project path.
    pub build_command: String,
    /// Local address the coordination listener binds.
    pub socket: SocketAddr,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fastlane/LaneRunner"),
            project: PathBuf::from("fastlane/LaneRunner/LaneRunner.toml"),
            artifact: PathBuf::from("fastlane/LaneRunner/build/LaneRunner"),
            entry: PathBuf::from("fastlane/Fastfile.swift"),
            build_command: "xcodebuild -project {project} build".to_string(),
            socket: SocketAddr::from(([127, 0, 0, 1], 2000)),
        }
    }
}

/// `[codegen]`: inputs and outputs of binding generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Exported action registry (JSON).
    pub actions: PathBuf,
    /// Directory generated Swift files are written to.
    pub output: PathBuf,
    /// Directory holding user-authored override files.
    pub config_dir: PathBuf,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            actions: PathBuf::from("actions.json"),
            output: PathBuf::from("fastlane/swift"),
            config_dir: PathBuf::from("fastlane"),
        }
    }
}

/// `[tools]`: which actions get an overridable configuration surface.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Tool configuration files (`Gymfile`, ...); `None` keeps the built-in catalog.
    pub config_files: Option<Vec<String>>,
}

impl Manifest {
    /// Directory the manifest was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a manifest path against [`Manifest::root`].
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn runner_dir(&self) -> PathBuf {
        self.resolve(&self.runner.dir)
    }

    pub fn project_path(&self) -> PathBuf {
        self.resolve(&self.runner.project)
    }

    /// Directory holding the runner project; source references are relative to it.
    pub fn project_dir(&self) -> PathBuf {
        let project = self.project_path();
        match project.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => self.root.clone(),
        }
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.resolve(&self.runner.artifact)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.resolve(&self.runner.entry)
    }

    pub fn actions_path(&self) -> PathBuf {
        self.resolve(&self.codegen.actions)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.codegen.output)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.resolve(&self.codegen.config_dir)
    }

    pub fn socket(&self) -> SocketAddr {
        self.runner.socket
    }

    /// The build command with the project path substituted.
    pub fn build_command(&self) -> String {
        self.runner
            .build_command
            .replace("{project}", &self.project_path().display().to_string())
    }

    /// Tool catalog from `[tools]`, or the built-in one.
    pub fn tool_catalog(&self) -> ToolCatalog {
        match &self.tools.config_files {
            Some(files) => ToolCatalog::from_config_files(files),
            None => ToolCatalog::defaults(),
        }
    }

    /// Default ignore rules merged with `[ignore]`.
    pub fn ignore_rules(&self) -> IgnoreRules {
        let configured = self
            .ignore
            .iter()
            .fold(IgnoreRules::none(), |rules, (action, keys)| {
                rules.ignore(action, keys.iter().cloned())
            });
        IgnoreRules::defaults().merge(configured)
    }
}
