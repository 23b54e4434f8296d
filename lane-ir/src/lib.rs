//! Intermediate representation types for lanebridge.
//!
//! These types describe what the action registry exposes and how the
//! generator is told to treat it:
//!
//! ```text
//! registry export (JSON) → ActionDescriptor → BindingSpec → Swift sources
//! ```
//!
//! The IR is language-agnostic; nothing here knows about Swift.

mod action;
mod ignore;
mod registry;
mod tools;

pub use action::{ActionDescriptor, OptionDescriptor, SemanticType};
pub use ignore::IgnoreRules;
pub use registry::{ActionRegistry, JsonRegistry, RegistryError, StaticRegistry};
pub use tools::{DEFAULT_TOOL_CONFIG_FILES, ToolCatalog, ToolConfig};
