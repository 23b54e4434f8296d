//! Deciding whether the runner artifact must be rebuilt.
//!
//! Modification times are compared in whole seconds since the Unix epoch:
//! the artifact is stale when it is strictly older than the entry script.

use std::{
    fmt,
    io,
    path::{Path, PathBuf},
    time::UNIX_EPOCH,
};

use crate::{BuildOutput, BuildStep, RunnerError};

/// Why a rebuild is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    ArtifactMissing,
    EntryNewer,
    /// The override resolver changed the project's source list.
    ProjectChanged,
    /// A rebuild was requested explicitly.
    Forced,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StaleReason::ArtifactMissing => "runner artifact does not exist",
            StaleReason::EntryNewer => "entry script is newer than the runner artifact",
            StaleReason::ProjectChanged => "build project sources changed",
            StaleReason::Forced => "rebuild requested",
        };
        f.write_str(text)
    }
}

/// Timestamps read from disk for one freshness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerState {
    pub artifact_path: PathBuf,
    /// Seconds since the epoch; `None` when the artifact does not exist.
    pub artifact_modified: Option<u64>,
    /// Seconds since the epoch; `None` when the entry script does not exist.
    pub entry_modified: Option<u64>,
    pub needs_rebuild: bool,
}

impl RunnerState {
    pub fn inspect(artifact: &Path, entry: &Path) -> io::Result<Self> {
        let artifact_modified = modified_secs(artifact)?;
        let entry_modified = modified_secs(entry)?;
        Ok(Self {
            artifact_path: artifact.to_path_buf(),
            artifact_modified,
            entry_modified,
            needs_rebuild: timestamp_reason(artifact_modified, entry_modified).is_some(),
        })
    }

    /// Stale reason from the timestamps alone.
    pub fn reason(&self) -> Option<StaleReason> {
        timestamp_reason(self.artifact_modified, self.entry_modified)
    }
}

fn timestamp_reason(artifact: Option<u64>, entry: Option<u64>) -> Option<StaleReason> {
    match (artifact, entry) {
        (None, _) => Some(StaleReason::ArtifactMissing),
        (Some(artifact), Some(entry)) if artifact < entry => Some(StaleReason::EntryNewer),
        _ => None,
    }
}

fn modified_secs(path: &Path) -> io::Result<Option<u64>> {
    match std::fs::metadata(path) {
        Ok(metadata) => {
            let modified = metadata.modified()?;
            Ok(Some(
                modified
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default(),
            ))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Where the coordinator is in its check-then-build cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessState {
    NotYetChecked,
    Fresh,
    Stale(StaleReason),
    Rebuilding,
    Built,
}

/// What [`BuildFreshnessCoordinator::ensure_built`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    UpToDate,
    Rebuilt {
        reason: StaleReason,
        output: BuildOutput,
    },
}

/// Rebuilds the runner artifact when it is out of date.
pub struct BuildFreshnessCoordinator<B> {
    artifact: PathBuf,
    entry: PathBuf,
    step: B,
    state: FreshnessState,
}

impl<B: BuildStep> BuildFreshnessCoordinator<B> {
    pub fn new(artifact: impl Into<PathBuf>, entry: impl Into<PathBuf>, step: B) -> Self {
        Self {
            artifact: artifact.into(),
            entry: entry.into(),
            step,
            state: FreshnessState::NotYetChecked,
        }
    }

    pub fn state(&self) -> FreshnessState {
        self.state
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    /// Move to `Fresh` or `Stale`.
    ///
    /// `project_changed` (a reference swap happened in this pass) and `force`
    /// make the artifact stale regardless of timestamps.
    pub fn check(&mut self, project_changed: bool, force: bool) -> io::Result<FreshnessState> {
        let state = RunnerState::inspect(&self.artifact, &self.entry)?;

        let reason = if force {
            Some(StaleReason::Forced)
        } else if project_changed {
            Some(StaleReason::ProjectChanged)
        } else {
            state.reason()
        };

        self.state = match reason {
            Some(reason) => {
                tracing::debug!(%reason, artifact = %self.artifact.display(), "runner is stale");
                FreshnessState::Stale(reason)
            }
            None => {
                tracing::debug!(artifact = %self.artifact.display(), "runner is up to date");
                FreshnessState::Fresh
            }
        };
        Ok(self.state)
    }

    /// Check, then build if stale. A failed build is not retried.
    pub fn ensure_built(
        &mut self,
        project_changed: bool,
        force: bool,
    ) -> Result<BuildOutcome, RunnerError> {
        match self.check(project_changed, force)? {
            FreshnessState::Stale(reason) => {
                self.state = FreshnessState::Rebuilding;
                match self.step.build() {
                    Ok(output) => {
                        self.state = FreshnessState::Built;
                        Ok(BuildOutcome::Rebuilt { reason, output })
                    }
                    Err(e) => {
                        self.state = FreshnessState::Stale(reason);
                        Err(e.into())
                    }
                }
            }
            _ => {
                self.state = FreshnessState::Built;
                Ok(BuildOutcome::UpToDate)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        fs::File,
        time::{Duration, SystemTime},
    };

    use tempfile::TempDir;

    use super::*;
    use crate::BuildError;

    struct CountingStep {
        builds: Cell<usize>,
        fail: bool,
    }

    impl CountingStep {
        fn new() -> Self {
            Self {
                builds: Cell::new(0),
                fail: false,
            }
        }
    }

    impl BuildStep for CountingStep {
        fn build(&self) -> Result<BuildOutput, BuildError> {
            self.builds.set(self.builds.get() + 1);
            if self.fail {
                Err(BuildError::Failed {
                    command: "fake".to_string(),
                    code: Some(1),
                    output: String::new(),
                })
            } else {
                Ok(BuildOutput::default())
            }
        }
    }

    fn touch(path: &Path, secs: u64) {
        let file = File::options().create(true).append(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    #[test]
    fn test_timestamp_rule() {
        assert_eq!(timestamp_reason(None, Some(5)), Some(StaleReason::ArtifactMissing));
        assert_eq!(timestamp_reason(Some(4), Some(5)), Some(StaleReason::EntryNewer));
        assert_eq!(timestamp_reason(Some(5), Some(5)), None);
        assert_eq!(timestamp_reason(Some(6), Some(5)), None);
        assert_eq!(timestamp_reason(Some(6), None), None);
    }

    #[test]
    fn test_sub_second_differences_are_ignored() {
        let temp = TempDir::new().unwrap();
        let artifact = temp.path().join("Runner");
        let entry = temp.path().join("Fastfile.swift");
        File::create(&artifact)
            .unwrap()
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_millis(100_100))
            .unwrap();
        File::create(&entry)
            .unwrap()
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_millis(100_900))
            .unwrap();

        let state = RunnerState::inspect(&artifact, &entry).unwrap();
        assert_eq!(state.artifact_modified, Some(100));
        assert!(!state.needs_rebuild);
    }

    #[test]
    fn test_fresh_artifact_skips_build() {
        let temp = TempDir::new().unwrap();
        let artifact = temp.path().join("Runner");
        let entry = temp.path().join("Fastfile.swift");
        touch(&entry, 1_000);
        touch(&artifact, 2_000);

        let mut coordinator = BuildFreshnessCoordinator::new(&artifact, &entry, CountingStep::new());
        assert_eq!(coordinator.state(), FreshnessState::NotYetChecked);
        assert_eq!(coordinator.ensure_built(false, false).unwrap(), BuildOutcome::UpToDate);
        assert_eq!(coordinator.state(), FreshnessState::Built);
        assert_eq!(coordinator.step.builds.get(), 0);
    }

    #[test]
    fn test_project_change_forces_rebuild() {
        let temp = TempDir::new().unwrap();
        let artifact = temp.path().join("Runner");
        let entry = temp.path().join("Fastfile.swift");
        touch(&entry, 1_000);
        touch(&artifact, 2_000);

        let mut coordinator = BuildFreshnessCoordinator::new(&artifact, &entry, CountingStep::new());
        let outcome = coordinator.ensure_built(true, false).unwrap();
        assert!(matches!(
            outcome,
            BuildOutcome::Rebuilt {
                reason: StaleReason::ProjectChanged,
                ..
            }
        ));
        assert_eq!(coordinator.step.builds.get(), 1);
    }

    #[test]
    fn test_failed_build_stays_stale() {
        let temp = TempDir::new().unwrap();
        let entry = temp.path().join("Fastfile.swift");
        touch(&entry, 1_000);

        let step = CountingStep {
            builds: Cell::new(0),
            fail: true,
        };
        let mut coordinator =
            BuildFreshnessCoordinator::new(temp.path().join("Runner"), &entry, step);

        let err = coordinator.ensure_built(false, false).unwrap_err();
        assert!(matches!(err, RunnerError::Build(BuildError::Failed { .. })));
        assert_eq!(
            coordinator.state(),
            FreshnessState::Stale(StaleReason::ArtifactMissing)
        );
        assert_eq!(coordinator.step.builds.get(), 1);
    }
}
