//! Core operations.
//!
//! This module contains the business logic for lanebridge commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod runner;

pub use check::check;
pub use generate::generate;
pub use runner::{build, lane_manager, link};
