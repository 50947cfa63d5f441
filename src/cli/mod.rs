//! Command Line Interface (CLI) layer for docprep.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) for the `resize` and `split` subcommands. It wires user-provided
//! options to the library functionality exposed via `docprep::api`.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
