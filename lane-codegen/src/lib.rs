//! Shared code generation utilities for lanebridge.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific binding generators (e.g., `lanebridge-codegen-swift`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`types`] - Option type resolution and the [`TypeMapper`] trait
//! - [`binding`] - Binding specifications derived from action descriptors
//! - [`language`] - The [`LanguageCodegen`] trait and generation results
//! - [`testing`] - Descriptor fixtures (feature-gated)

pub mod binding;
pub mod builder;
pub mod language;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use binding::{BindingSpec, ParamSpec, PlainBinding, ToolBinding};
pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use types::{Literal, MappedParam, ResolvedOption, TypeMapper, ValueType, resolve_option};
