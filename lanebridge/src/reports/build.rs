//! Build command report data structures.

use std::path::PathBuf;

use lanebridge_runner::BuildOutcome;

use super::output::{Output, Report};

/// Report data from a freshness check and optional rebuild.
#[derive(Debug)]
pub struct BuildReport {
    pub artifact: PathBuf,
    pub outcome: BuildOutcome,
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        let artifact = self.artifact.display().to_string();
        match &self.outcome {
            BuildOutcome::UpToDate => {
                out.preformatted(&format!("✓ {} is up to date", artifact));
            }
            BuildOutcome::Rebuilt { reason, .. } => {
                out.preformatted(&format!("✓ rebuilt {} ({})", artifact, reason));
            }
        }
    }
}
