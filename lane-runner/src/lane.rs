//! Validating lane invocations and driving link, build and run.

use std::{net::SocketAddr, path::PathBuf};

use crate::{
    BuildFreshnessCoordinator, BuildOutcome, BuildProject, BuildStep, ConfigOverrideResolver,
    LaunchRequest, Launcher, RunReport, RunnerError, RunnerIPCCoordinator, ipc::list_lanes,
};

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Lane names: ASCII letters, digits, `_` and `-`.
pub fn validate_lane(lane: &str) -> Result<(), RunnerError> {
    if lane.is_empty() {
        return Err(RunnerError::InvalidLane {
            lane: lane.to_string(),
            reason: "lane name is empty",
        });
    }
    if !is_token(lane) {
        return Err(RunnerError::InvalidLane {
            lane: lane.to_string(),
            reason: "only ASCII letters, digits, '_' and '-' are allowed",
        });
    }
    Ok(())
}

/// Keys follow the lane name rule; values must be non-empty single lines.
pub fn validate_params(params: &[(String, String)]) -> Result<(), RunnerError> {
    for (key, value) in params {
        if !is_token(key) {
            return Err(RunnerError::InvalidParameter {
                key: key.clone(),
                reason: "keys may only contain ASCII letters, digits, '_' and '-'",
            });
        }
        if value.is_empty() {
            return Err(RunnerError::InvalidParameter {
                key: key.clone(),
                reason: "value is empty",
            });
        }
        if value.contains(['\n', '\r']) {
            return Err(RunnerError::InvalidParameter {
                key: key.clone(),
                reason: "value spans multiple lines",
            });
        }
    }
    Ok(())
}

/// Pair up `KEY VALUE KEY VALUE ...` command line arguments.
pub fn parse_params(args: &[String]) -> Result<Vec<(String, String)>, RunnerError> {
    let pairs = args.chunks(2);
    let mut params = Vec::with_capacity(args.len() / 2);
    for pair in pairs {
        match pair {
            [key, value] => params.push((key.clone(), value.clone())),
            [key] => {
                return Err(RunnerError::InvalidParameter {
                    key: key.clone(),
                    reason: "missing value",
                });
            }
            _ => {}
        }
    }
    validate_params(&params)?;
    Ok(params)
}

/// Links overrides, keeps the runner built and runs lanes with it.
pub struct LaneManager<P, B, L> {
    project: P,
    resolver: ConfigOverrideResolver,
    freshness: BuildFreshnessCoordinator<B>,
    coordinator: RunnerIPCCoordinator<L>,
    socket: SocketAddr,
    working_dir: Option<PathBuf>,
}

impl<P: BuildProject, B: BuildStep, L: Launcher> LaneManager<P, B, L> {
    pub fn new(
        project: P,
        resolver: ConfigOverrideResolver,
        freshness: BuildFreshnessCoordinator<B>,
        coordinator: RunnerIPCCoordinator<L>,
        socket: SocketAddr,
    ) -> Self {
        Self {
            project,
            resolver,
            freshness,
            coordinator,
            socket,
            working_dir: None,
        }
    }

    /// Directory the runner process starts in.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn project(&self) -> &P {
        &self.project
    }

    /// Point the project at user override files; `true` when it changed.
    pub fn link(&mut self) -> Result<bool, RunnerError> {
        Ok(self.resolver.apply(&mut self.project)?)
    }

    /// Link, then rebuild when stale (or when `force`).
    pub fn ensure_built(&mut self, force: bool) -> Result<BuildOutcome, RunnerError> {
        let changed = self.link()?;
        self.freshness.ensure_built(changed, force)
    }

    /// Output of the runner's list mode.
    pub fn lanes(&mut self) -> Result<String, RunnerError> {
        self.ensure_built(false)?;
        Ok(list_lanes(
            self.freshness.artifact(),
            self.working_dir.as_deref(),
        )?)
    }

    /// Validate, build if needed, then run the lane.
    ///
    /// Invalid input fails before anything is built or spawned; failures of
    /// the run itself are carried in the report.
    pub fn run(&mut self, lane: &str, params: Vec<(String, String)>) -> Result<RunReport, RunnerError> {
        validate_lane(lane)?;
        validate_params(&params)?;
        self.ensure_built(false)?;

        let mut request =
            LaunchRequest::new(self.freshness.artifact(), lane, self.socket).params(params);
        if let Some(dir) = &self.working_dir {
            request = request.working_dir(dir);
        }
        Ok(self.coordinator.run(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lane() {
        assert!(validate_lane("beta").is_ok());
        assert!(validate_lane("release-candidate_2").is_ok());
        assert!(matches!(validate_lane(""), Err(RunnerError::InvalidLane { .. })));
        assert!(matches!(validate_lane("beta; rm"), Err(RunnerError::InvalidLane { .. })));
        assert!(matches!(validate_lane("bêta"), Err(RunnerError::InvalidLane { .. })));
    }

    #[test]
    fn test_parse_params() {
        let args: Vec<String> = ["version", "1.2.3", "notes", "fixed a crash"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let params = parse_params(&args).unwrap();
        assert_eq!(
            params,
            [
                ("version".to_string(), "1.2.3".to_string()),
                ("notes".to_string(), "fixed a crash".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_params_rejects_dangling_key() {
        let args = vec!["version".to_string()];
        assert!(matches!(
            parse_params(&args),
            Err(RunnerError::InvalidParameter { key, .. }) if key == "version"
        ));
    }

    #[test]
    fn test_validate_params() {
        let bad_key = vec![("my key".to_string(), "x".to_string())];
        let empty = vec![("notes".to_string(), String::new())];
        let multiline = vec![("notes".to_string(), "a\nb".to_string())];

        for params in [bad_key, empty, multiline] {
            assert!(matches!(
                validate_params(&params),
                Err(RunnerError::InvalidParameter { .. })
            ));
        }
    }
}
