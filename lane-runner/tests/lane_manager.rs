//! End-to-end: link, build when stale, run a lane through a real process.

#![cfg(unix)]

use std::{
    fs::{self, File},
    net::SocketAddr,
    os::unix::fs::PermissionsExt,
    path::Path,
    time::{Duration, SystemTime},
};

use lanebridge_ir::ToolCatalog;
use lanebridge_runner::{
    BuildFreshnessCoordinator, BuildOutcome, BuildProject, ConfigOverrideResolver, LaneManager,
    OverrideLayout, ProcessLauncher, RunError, RunnerError, RunnerIPCCoordinator, ShellBuildStep,
    StaleReason, TomlProject,
};
use tempfile::TempDir;

/// A fake runner: records its arguments, lists one lane, fails the `broken` lane.
const RUNNER_SCRIPT: &str = r#"#!/bin/sh
if [ "$1" = "lanes" ]; then
  echo "beta"
  exit 0
fi
echo "$@" > "$(dirname "$0")/args.txt"
if [ "$2" = "broken" ]; then
  exit 7
fi
"#;

struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("fastlane/LaneRunner/build")).unwrap();
        fs::write(temp.path().join("runner.sh"), RUNNER_SCRIPT).unwrap();
        fs::write(temp.path().join("fastlane/Fastfile.swift"), "// lanes\n").unwrap();
        TomlProject::new(
            temp.path().join("fastlane/LaneRunner/LaneRunner.toml"),
            "LaneRunner",
            vec!["../swift/Gymfile.swift".into()],
        )
        .save()
        .unwrap();
        Self { temp }
    }

    fn path(&self, relative: &str) -> std::path::PathBuf {
        self.temp.path().join(relative)
    }

    fn manager(&self) -> LaneManager<TomlProject, ShellBuildStep, ProcessLauncher> {
        let artifact = self.path("fastlane/LaneRunner/build/LaneRunner");
        let build = ShellBuildStep::new(format!(
            "cp runner.sh '{0}' && chmod +x '{0}' && echo built >> build.log",
            artifact.display()
        ))
        .current_dir(self.temp.path());

        LaneManager::new(
            TomlProject::open(self.path("fastlane/LaneRunner/LaneRunner.toml")).unwrap(),
            ConfigOverrideResolver::for_catalog(&ToolCatalog::defaults(), &self.layout()),
            BuildFreshnessCoordinator::new(&artifact, self.path("fastlane/Fastfile.swift"), build),
            RunnerIPCCoordinator::new(),
            SocketAddr::from(([127, 0, 0, 1], 0)),
        )
    }

    fn layout(&self) -> OverrideLayout {
        OverrideLayout::new(
            self.path("fastlane/LaneRunner"),
            self.path("fastlane/swift"),
            self.path("fastlane"),
        )
    }

    fn builds(&self) -> usize {
        fs::read_to_string(self.path("build.log"))
            .map(|log| log.lines().count())
            .unwrap_or(0)
    }
}

fn set_mtime(path: &Path, secs: u64) {
    File::options()
        .append(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

#[test]
fn test_build_only_when_stale() {
    let fixture = Fixture::new();
    let mut manager = fixture.manager();

    let outcome = manager.ensure_built(false).unwrap();
    assert!(matches!(
        outcome,
        BuildOutcome::Rebuilt {
            reason: StaleReason::ArtifactMissing,
            ..
        }
    ));
    assert_eq!(fixture.builds(), 1);

    let artifact = fixture.path("fastlane/LaneRunner/build/LaneRunner");
    let entry = fixture.path("fastlane/Fastfile.swift");
    set_mtime(&entry, 1_000);
    set_mtime(&artifact, 2_000);
    assert_eq!(manager.ensure_built(false).unwrap(), BuildOutcome::UpToDate);
    assert_eq!(fixture.builds(), 1);

    set_mtime(&artifact, 2_000);
    set_mtime(&entry, 2_000);
    assert_eq!(manager.ensure_built(false).unwrap(), BuildOutcome::UpToDate);

    set_mtime(&entry, 2_001);
    assert!(matches!(
        manager.ensure_built(false).unwrap(),
        BuildOutcome::Rebuilt {
            reason: StaleReason::EntryNewer,
            ..
        }
    ));
    assert_eq!(fixture.builds(), 2);
}

#[test]
fn test_override_swap_forces_rebuild() {
    let fixture = Fixture::new();
    let mut manager = fixture.manager();
    manager.ensure_built(false).unwrap();
    set_mtime(&fixture.path("fastlane/Fastfile.swift"), 1_000);
    set_mtime(&fixture.path("fastlane/LaneRunner/build/LaneRunner"), 2_000);

    fs::write(fixture.path("fastlane/Gymfile.swift"), "").unwrap();
    assert!(matches!(
        manager.ensure_built(false).unwrap(),
        BuildOutcome::Rebuilt {
            reason: StaleReason::ProjectChanged,
            ..
        }
    ));
    assert_eq!(fixture.builds(), 2);
}

#[test]
fn test_run_passes_lane_and_parameters() {
    let fixture = Fixture::new();
    let mut manager = fixture.manager().working_dir(fixture.temp.path());

    let report = manager
        .run("beta", vec![("version".into(), "1.2".into())])
        .unwrap();

    assert!(report.is_success(), "{:?}", report.error);
    let args = fs::read_to_string(fixture.path("fastlane/LaneRunner/build/args.txt")).unwrap();
    assert_eq!(args, "lane beta version 1.2\n");
}

#[test]
fn test_failing_lane_reports_exit_code() {
    let fixture = Fixture::new();
    let mut manager = fixture.manager();

    let report = manager.run("broken", Vec::new()).unwrap();
    assert!(matches!(report.error, Some(RunError::RunnerExited { code: Some(7) })));
}

#[test]
fn test_invalid_lane_fails_before_build() {
    let fixture = Fixture::new();
    let mut manager = fixture.manager();

    assert!(matches!(
        manager.run("beta && reboot", Vec::new()),
        Err(RunnerError::InvalidLane { .. })
    ));
    assert_eq!(fixture.builds(), 0);
}

#[test]
fn test_lanes_lists_runner_output() {
    let fixture = Fixture::new();
    let mut manager = fixture.manager();
    assert_eq!(manager.lanes().unwrap(), "beta\n");

    let mode = fs::metadata(fixture.path("fastlane/LaneRunner/build/LaneRunner"))
        .unwrap()
        .permissions()
        .mode();
    assert!(mode & 0o111 != 0);
}
