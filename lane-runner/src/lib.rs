//! Building and running the compiled lane runner.
//!
//! - [`ConfigOverrideResolver`] points the build project at user-authored
//!   tool files when they exist.
//! - [`BuildFreshnessCoordinator`] rebuilds the runner when it is stale.
//! - [`RunnerIPCCoordinator`] runs a lane next to a coordination listener.
//! - [`LaneManager`] ties the three together.

mod build;
mod error;
mod freshness;
mod ipc;
mod lane;
mod overrides;
mod project;

pub use build::{BuildOutput, BuildStep, ShellBuildStep};
pub use error::{BuildError, ProjectError, RunError, RunnerError};
pub use freshness::{
    BuildFreshnessCoordinator, BuildOutcome, FreshnessState, RunnerState, StaleReason,
};
pub use ipc::{
    FinishHook, LaunchRequest, Launcher, LineSink, LogFinishHook, LogLines, ProcessLauncher,
    Ready, RunReport, RunnerIPCCoordinator, list_lanes,
};
pub use lane::{LaneManager, parse_params, validate_lane, validate_params};
pub use overrides::{ConfigFileMapping, ConfigOverrideResolver, OverrideLayout};
pub use project::{BuildProject, TomlProject};
