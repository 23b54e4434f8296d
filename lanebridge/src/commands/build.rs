use std::path::Path;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// Rebuild even when the runner is up to date
    #[arg(long)]
    pub force: bool,
}

impl BuildCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let manifest = load_manifest(config);
        let report = ops::build(&manifest, self.force)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
