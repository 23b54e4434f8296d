use std::path::Path;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let manifest = load_manifest(config);
        let report = ops::check(&manifest, config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
