use std::path::Path;

use clap::Args;
use eyre::{Result, WrapErr};
use lanebridge_runner::parse_params;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RunCommand {
    /// Lane to run
    pub lane: String,

    /// Lane parameters as KEY VALUE pairs
    #[arg(trailing_var_arg = true, value_name = "PARAM")]
    pub params: Vec<String>,
}

impl RunCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let params = parse_params(&self.params)?;
        let manifest = load_manifest(config);

        let mut manager = ops::lane_manager(&manifest)?;
        let report = manager
            .run(&self.lane, params)
            .wrap_err_with(|| format!("Failed to run lane '{}'", self.lane))?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
