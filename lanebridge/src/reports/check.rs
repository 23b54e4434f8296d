//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest and registry validation.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub actions_path: PathBuf,
    /// Actions bound as free functions.
    pub functions: usize,
    /// Actions bound as tools.
    pub tools: usize,
    /// Actions without option metadata.
    pub skipped: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.preformatted(&format!(
            "✓ {}: {} functions, {} tools, {} skipped",
            self.actions_path.display(),
            self.functions,
            self.tools,
            self.skipped.len()
        ));
    }
}
