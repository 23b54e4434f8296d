//! The native build step producing the runner artifact.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::BuildError;

/// Captured output of a successful build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Something that (re)builds the runner.
pub trait BuildStep {
    fn build(&self) -> Result<BuildOutput, BuildError>;
}

/// Runs a shell command through `sh -c`.
#[derive(Debug, Clone)]
pub struct ShellBuildStep {
    command: String,
    working_dir: Option<PathBuf>,
}

impl ShellBuildStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_dir: None,
        }
    }

    /// Substitute `{project}` in `template` with the project path.
    pub fn from_template(template: &str, project: &Path) -> Self {
        Self::new(template.replace("{project}", &project.display().to_string()))
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl BuildStep for ShellBuildStep {
    fn build(&self) -> Result<BuildOutput, BuildError> {
        tracing::debug!(command = %self.command, "running build command");

        let mut command = Command::new("sh");
        command.arg("-c").arg(&self.command);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| BuildError::Spawn {
            command: self.command.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(BuildError::Failed {
                command: self.command.clone(),
                code: output.status.code(),
                output: format!("{}{}", stdout, stderr),
            });
        }

        Ok(BuildOutput { stdout, stderr })
    }
}
