//! High-level library API: one entry point per job. Prefer these over the
//! low-level `core` and `io` modules when embedding docprep.
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::params::{ResizeParams, SplitParams};
use crate::core::processing::resize::{calculate_target_dimensions, resize_raster};
use crate::core::processing::sections::{Section, SectionSplitter, lines_with_terminators};
use crate::error::{Error, Result};
use crate::io::{read_document, read_raster, write_raster, write_section};
use crate::types::{PixelLayout, ResampleFilter, TargetDimensions};

/// Outcome of [`resize_image_file`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResizeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source: TargetDimensions,
    pub target: TargetDimensions,
    pub layout: PixelLayout,
    pub filter: ResampleFilter,
}

/// One section file written by [`split_document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenSection {
    pub heading: String,
    pub path: PathBuf,
    pub lines: usize,
}

/// Outcome of [`split_document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Every flush in document order; a repeated heading appears once per occurrence
    pub written: Vec<WrittenSection>,
    /// Lines before the first heading
    pub discarded_lines: usize,
    /// Headings met more than once; their file holds the last occurrence
    pub overwritten: Vec<String>,
    /// Headings of the map that never appeared
    pub missing: Vec<String>,
}

impl SplitReport {
    /// Distinct files left on disk after the run
    pub fn files(&self) -> BTreeSet<&PathBuf> {
        self.written.iter().map(|w| &w.path).collect()
    }
}

/// Decode `params.input`, scale it to `params.max_width` keeping the aspect
/// ratio (height truncated), and write the result to `params.output_path()`,
/// overwriting any existing file.
pub fn resize_image_file(params: &ResizeParams) -> Result<ResizeReport> {
    let output = params.output_path();
    if is_same_file(&output, &params.input) {
        return Err(Error::InvalidArgument {
            arg: "output",
            value: output.display().to_string(),
        });
    }

    let (source, format) = read_raster(&params.input)?;
    let target = calculate_target_dimensions(source.width, source.height, params.max_width)?;
    let resized = resize_raster(&source, target, params.filter)?;
    write_raster(&output, &resized, format)?;

    info!(
        "Resized {:?} -> {:?}: {}x{} -> {}",
        params.input, output, source.width, source.height, target
    );

    Ok(ResizeReport {
        input: params.input.clone(),
        output,
        source: TargetDimensions {
            width: source.width,
            height: source.height,
        },
        target,
        layout: source.layout,
        filter: params.filter,
    })
}

/// True when both paths name the same file, following `..` and symlinks
/// when the output already exists.
fn is_same_file(output: &Path, input: &Path) -> bool {
    if output == input {
        return true;
    }
    match (fs::canonicalize(output), fs::canonicalize(input)) {
        (Ok(out), Ok(inp)) => out == inp,
        _ => false,
    }
}

/// Split `params.input` into one file per heading found, under
/// `params.output_dir` (created if missing).
///
/// Sections are written as soon as the next heading closes them, so a failure
/// part-way through leaves the earlier files in place.
pub fn split_document(params: &SplitParams) -> Result<SplitReport> {
    fs::create_dir_all(&params.output_dir).map_err(|source| Error::Write {
        path: params.output_dir.clone(),
        source,
    })?;

    let text = read_document(&params.input)?;
    info!(
        "Splitting {:?} into {:?} ({} headings)",
        params.input,
        params.output_dir,
        params.sections.len()
    );

    let mut splitter = SectionSplitter::new(&params.sections);
    let mut written = Vec::new();
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();

    let mut flush = |section: Section<'_>| -> Result<()> {
        let path = write_section(&params.output_dir, section.file_name, &section.contents())?;
        debug!("Wrote {} lines to {:?}", section.lines.len(), path);
        *seen.entry(section.heading.to_string()).or_default() += 1;
        written.push(WrittenSection {
            heading: section.heading.to_string(),
            path,
            lines: section.lines.len(),
        });
        Ok(())
    };

    for line in lines_with_terminators(&text) {
        if let Some(section) = splitter.feed(line) {
            flush(section)?;
        }
    }
    let discarded_lines = splitter.discarded_lines();
    if let Some(section) = splitter.finish() {
        flush(section)?;
    }

    if discarded_lines > 0 {
        warn!(
            "Discarded {} line(s) before the first heading",
            discarded_lines
        );
    }

    let overwritten: Vec<String> = seen
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(heading, _)| heading.clone())
        .collect();
    for heading in &overwritten {
        warn!("Heading {:?} appeared more than once; last occurrence kept", heading);
    }

    let mut missing: Vec<String> = params
        .sections
        .headings()
        .filter(|heading| !seen.contains_key(*heading))
        .map(str::to_string)
        .collect();
    missing.sort();
    for heading in &missing {
        debug!("Heading {:?} not found in source", heading);
    }

    Ok(SplitReport {
        input: params.input.clone(),
        output_dir: params.output_dir.clone(),
        written,
        discarded_lines,
        overwritten,
        missing,
    })
}
