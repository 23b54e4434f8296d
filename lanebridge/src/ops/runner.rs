//! Runner operations - linking overrides, building and running lanes.

use eyre::{Context, Result};
use lanebridge_manifest::Manifest;
use lanebridge_runner::{
    BuildFreshnessCoordinator, ConfigOverrideResolver, LaneManager, OverrideLayout,
    ProcessLauncher, RunnerIPCCoordinator, ShellBuildStep, TomlProject,
};

use crate::reports::{BuildReport, LinkReport, LinkedTool};

pub type ManifestLaneManager = LaneManager<TomlProject, ShellBuildStep, ProcessLauncher>;

fn open_project(manifest: &Manifest) -> Result<TomlProject> {
    let path = manifest.project_path();
    TomlProject::open(&path)
        .wrap_err_with(|| format!("Failed to open runner project {}", path.display()))
}

fn resolver(manifest: &Manifest) -> ConfigOverrideResolver {
    let layout = OverrideLayout::new(
        manifest.project_dir(),
        manifest.output_dir(),
        manifest.config_dir(),
    );
    ConfigOverrideResolver::for_catalog(&manifest.tool_catalog(), &layout)
}

/// Wire a [`LaneManager`] from the manifest's runner settings.
pub fn lane_manager(manifest: &Manifest) -> Result<ManifestLaneManager> {
    let build_step =
        ShellBuildStep::new(manifest.build_command()).current_dir(manifest.runner_dir());
    let freshness = BuildFreshnessCoordinator::new(
        manifest.artifact_path(),
        manifest.entry_path(),
        build_step,
    );

    Ok(LaneManager::new(
        open_project(manifest)?,
        resolver(manifest),
        freshness,
        RunnerIPCCoordinator::new(),
        manifest.socket(),
    )
    .working_dir(manifest.runner_dir()))
}

/// Swap project references to match the override files on disk.
pub fn link(manifest: &Manifest) -> Result<LinkReport> {
    let mut project = open_project(manifest)?;
    let resolver = resolver(manifest);
    let changed = resolver
        .apply(&mut project)
        .wrap_err("Failed to update the runner project")?;

    let tools = resolver
        .mappings()
        .iter()
        .map(|mapping| LinkedTool {
            file_name: mapping.file_name.clone(),
            user_file: mapping.user_file().map(|path| path.to_path_buf()),
        })
        .collect();

    Ok(LinkReport {
        project_path: project.path().to_path_buf(),
        changed,
        tools,
    })
}

/// Link, then rebuild the runner if it is stale.
pub fn build(manifest: &Manifest, force: bool) -> Result<BuildReport> {
    let mut manager = lane_manager(manifest)?;
    let outcome = manager
        .ensure_built(force)
        .wrap_err("Failed to build the runner")?;

    Ok(BuildReport {
        artifact: manifest.artifact_path(),
        outcome,
    })
}
