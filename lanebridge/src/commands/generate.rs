use std::path::Path;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let manifest = load_manifest(config);
        let report = ops::generate(&manifest, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
