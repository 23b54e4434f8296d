//! Swift binding generator for lanebridge.
//!
//! Turns the action registry into Swift source the lane runner is built
//! from: one call-through function per action, shared decoders, and for
//! configuration tools a protocol with defaults plus an overridable
//! adapter class.
//!
//! ```ignore
//! use lanebridge_codegen::LanguageCodegen;
//! use lanebridge_codegen_swift::Generator;
//! use lanebridge_ir::JsonRegistry;
//!
//! let registry = JsonRegistry::open(Path::new("actions.json"))?;
//! let result = Generator::from_registry(&registry)
//!     .with_override_dir("fastlane")
//!     .generate(Path::new("fastlane/swift"))?;
//! ```
//!
//! # Generated Output
//!
//! - `Actions.swift` - every function, the decoders and tool registry objects
//! - `<Tool>fileProtocol.swift` - tool protocol and default-implementing extension
//! - `<Tool>file.swift` - empty adapter class, skipped when the user supplies one

mod decoders;
mod emitter;
mod generator;
mod naming;
mod swift_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use decoders::{DECODERS, decoder_for};
pub use emitter::{BindingEmitter, EmittedBinding, EmittedTool};
pub use generator::Generator;
pub use lanebridge_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::identifier;
pub use swift_file::{RawCode, SwiftFile};
pub use type_mapper::SwiftTypeMapper;
