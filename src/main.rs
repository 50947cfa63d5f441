//! docprep CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, dispatch to the resize or
//! split job, and exit with the appropriate status. For programmatic use,
//! prefer the library API (`docprep::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
