use std::path::Path;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct LinkCommand {}

impl LinkCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let manifest = load_manifest(config);
        let report = ops::link(&manifest)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
