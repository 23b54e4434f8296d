use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

/// Failures surfaced to whoever asked for a build or a lane run.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("invalid lane name '{lane}': {reason}")]
    InvalidLane { lane: String, reason: &'static str },

    #[error("invalid parameter '{key}': {reason}")]
    InvalidParameter { key: String, reason: &'static str },

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reading or writing the build project file.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to access build project '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed build project '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize build project")]
    Serialize(#[from] toml::ser::Error),
}

/// The native build step.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to start build command `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("build command `{command}` failed{}\n{output}", exit_suffix(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

/// A lane run through the coordination channel.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to bind coordination socket {addr}")]
    ListenerBind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("coordination socket never became ready")]
    ListenerUnavailable,

    #[error("failed to start runner '{program}'")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("runner exited{}", exit_suffix(.code))]
    RunnerExited { code: Option<i32> },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{unit} panicked")]
    UnitPanicked { unit: &'static str },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " after being terminated by a signal".to_string(),
    }
}
