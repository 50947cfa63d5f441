use tracing::info;
use tracing_subscriber::EnvFilter;

use docprep::{ResizeParams, SectionMap, SplitParams, resize_image_file, split_document};

use super::args::{CliArgs, Command, ResizeArgs, SplitArgs};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_resize(args: ResizeArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let params = ResizeParams {
        input: args.input,
        output: args.output,
        max_width: args.max_width,
        filter: args.filter,
    };

    let report = resize_image_file(&params)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Resized {} ({}) -> {} ({})",
            report.input.display(),
            report.source,
            report.output.display(),
            report.target
        );
    }
    Ok(())
}

fn run_split(args: SplitArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let params = SplitParams {
        input: args.input,
        output_dir: args.output_dir,
        sections: SectionMap::insolver(),
    };

    let report = split_document(&params)?;
    info!(
        "Split complete: {} flush(es), {} file(s)",
        report.written.len(),
        report.files().len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "All sections split and saved in {}",
            report.output_dir.display()
        );
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    match args.command {
        Command::Resize(resize) => run_resize(resize, args.json),
        Command::Split(split) => run_split(split, args.json),
    }
}
