mod build;
mod check;
mod completions;
mod generate;
mod lanes;
mod link;
mod run;

use std::path::{Path, PathBuf};

use build::BuildCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use lanebridge_manifest::Manifest;
use lanes::LanesCommand;
use link::LinkCommand;
use run::RunCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for lanebridge_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

pub(crate) fn load_manifest(path: &Path) -> Manifest {
    Manifest::from_file(path).unwrap_or_exit()
}

#[derive(Parser)]
#[command(name = "lanebridge")]
#[command(version)]
#[command(about = "Generate Swift lane bindings and run lanes through the compiled runner")]
pub(crate) struct Cli {
    /// Path to lanebridge.toml
    #[arg(short, long, global = true, default_value = "lanebridge.toml")]
    pub config: PathBuf,

    /// Log decisions (stale reasons, reference swaps) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.config),
            Commands::Link(cmd) => cmd.run(&self.config),
            Commands::Build(cmd) => cmd.run(&self.config),
            Commands::Lanes(cmd) => cmd.run(&self.config),
            Commands::Run(cmd) => cmd.run(&self.config),
            Commands::Check(cmd) => cmd.run(&self.config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Swift bindings from the exported action registry
    ///
    /// Adapter banners carry the current time, so only `Actions.swift` and the
    /// protocol files are byte-identical between runs.
    Generate(GenerateCommand),

    /// Point the runner project at user-provided tool files
    Link(LinkCommand),

    /// Rebuild the runner if it is out of date
    Build(BuildCommand),

    /// List the lanes the runner knows about
    Lanes(LanesCommand),

    /// Run a lane
    Run(RunCommand),

    /// Validate lanebridge.toml and the actions file without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
