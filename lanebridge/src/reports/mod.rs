//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod build;
mod check;
mod generate;
mod link;
mod output;
mod run;

pub use build::BuildReport;
pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult};
pub use link::{LinkReport, LinkedTool};
pub use output::{Report, TerminalOutput};
