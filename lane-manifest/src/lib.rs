//! `lanebridge.toml` parsing and validation.
//!
//! Every table is optional; validation failures are reported as `miette`
//! diagnostics pointing into the manifest source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{CodegenConfig, Manifest, RunnerConfig, ToolsConfig};
pub use parse::{MANIFEST_FILE, parse_manifest};
