//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific binding generators.
///
/// Implement this trait to emit bindings for a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "swift")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "swift")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Absolute paths of files that were written
    pub written: Vec<PathBuf>,
    /// User-supplied files that replaced a generated file (absolute paths)
    pub overridden: Vec<PathBuf>,
    /// Actions skipped because they expose no options
    pub skipped_actions: Vec<String>,
    /// Human readable warnings (e.g. unrecognized option types)
    pub warnings: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
