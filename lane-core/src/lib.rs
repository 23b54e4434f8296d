//! Core utilities and types for lanebridge.
//!
//! This crate provides the generated-file abstraction, naming helpers and
//! the generation stamp shared by the generator crates.

mod file;
mod stamp;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
pub use stamp::GenerationStamp;
// String utilities
pub use utils::{capitalize, escape_string, to_camel_case, to_pascal_case};
