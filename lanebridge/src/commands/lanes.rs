use std::path::Path;

use clap::Args;
use eyre::{Result, WrapErr};

use super::load_manifest;
use crate::ops;

#[derive(Args)]
pub struct LanesCommand {}

impl LanesCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let manifest = load_manifest(config);
        let mut manager = ops::lane_manager(&manifest)?;
        let lanes = manager.lanes().wrap_err("Failed to list lanes")?;
        print!("{}", lanes);
        Ok(())
    }
}
