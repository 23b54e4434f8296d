//! Link command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from override linking.
#[derive(Debug)]
pub struct LinkReport {
    pub project_path: PathBuf,
    /// Whether the project file was rewritten.
    pub changed: bool,
    pub tools: Vec<LinkedTool>,
}

/// Which file one tool resolves to.
#[derive(Debug)]
pub struct LinkedTool {
    pub file_name: String,
    /// The user's replacement, when present.
    pub user_file: Option<PathBuf>,
}

impl Report for LinkReport {
    fn render(&self, out: &mut dyn Output) {
        let status = if self.changed { "updated" } else { "up to date" };
        out.key_value(&self.project_path.display().to_string(), status);

        for tool in &self.tools {
            match &tool.user_file {
                Some(path) => {
                    out.added_item(&format!("{} -> {}", tool.file_name, path.display()))
                }
                None => out.list_item(&format!("{} (generated)", tool.file_name)),
            }
        }
    }
}
