//! Generate command report data structures.

use std::path::PathBuf;

use lanebridge_codegen::{GenerateResult, PreviewFile};

use super::output::{Output, Report};

/// Report data from binding generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of actions in the registry export.
    pub action_count: usize,
    /// Directory the bindings go to.
    pub output_dir: PathBuf,
    pub result: GenerationResult,
}

/// Result of binding generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &GenerateResult) {
        for warning in &written.warnings {
            out.warning(warning);
        }

        out.key_value("Actions", &self.action_count.to_string());
        out.key_value("Generated", &self.output_dir.display().to_string());

        out.newline();
        out.section("Written");
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }

        if !written.overridden.is_empty() {
            out.newline();
            out.section("Kept user files");
            for path in &written.overridden {
                out.list_item(&path.display().to_string());
            }
        }

        if !written.skipped_actions.is_empty() {
            out.newline();
            out.section("Skipped (no options)");
            for action in &written.skipped_actions {
                out.list_item(action);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
