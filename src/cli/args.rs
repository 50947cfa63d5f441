use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use docprep::ResampleFilter;
use docprep::core::params::{
    DEFAULT_DOCUMENT_INPUT, DEFAULT_IMAGE_INPUT, DEFAULT_MAX_WIDTH, DEFAULT_SECTIONS_DIR,
};

#[derive(Parser)]
#[command(name = "docprep", version, about = "docprep CLI")]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// Print the run report as JSON instead of a summary line
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scale one image to a fixed width, keeping its aspect ratio
    Resize(ResizeArgs),
    /// Split a master document into one file per known heading
    Split(SplitArgs),
}

#[derive(Args)]
pub struct ResizeArgs {
    /// Source image
    #[arg(short, long, default_value = DEFAULT_IMAGE_INPUT)]
    pub input: PathBuf,

    /// Output image (defaults to <stem>_small.<ext> next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output width in pixels; height follows the aspect ratio
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: u32,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,
}

#[derive(Args)]
pub struct SplitArgs {
    /// Master document to split
    #[arg(short, long, default_value = DEFAULT_DOCUMENT_INPUT)]
    pub input: PathBuf,

    /// Destination folder for the section files
    #[arg(short, long, default_value = DEFAULT_SECTIONS_DIR)]
    pub output_dir: PathBuf,
}
