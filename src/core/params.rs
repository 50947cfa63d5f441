use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::processing::sections::SectionMap;
use crate::types::ResampleFilter;

pub const DEFAULT_MAX_WIDTH: u32 = 400;
pub const DEFAULT_IMAGE_INPUT: &str = "Divergence_CavityFlow.png";
pub const DEFAULT_DOCUMENT_INPUT: &str = "docs/INSolver.md";
pub const DEFAULT_SECTIONS_DIR: &str = "docs/sections";

/// Parameters for a single proportional image resize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeParams {
    pub input: PathBuf,
    /// Destination file; None derives `<stem>_small.<ext>` next to the input
    pub output: Option<PathBuf>,
    /// Output width in pixels; height follows the source aspect ratio
    pub max_width: u32,
    pub filter: ResampleFilter,
}

impl ResizeParams {
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => derive_small_path(&self.input),
        }
    }
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_IMAGE_INPUT),
            output: None,
            max_width: DEFAULT_MAX_WIDTH,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

/// Parameters for splitting one document into per-section files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitParams {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub sections: SectionMap,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DOCUMENT_INPUT),
            output_dir: PathBuf::from(DEFAULT_SECTIONS_DIR),
            sections: SectionMap::insolver(),
        }
    }
}

/// `dir/name.png` -> `dir/name_small.png`
pub fn derive_small_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}_small.{}", stem, ext.to_string_lossy()),
        None => format!("{}_small", stem),
    };
    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_path_keeps_directory_and_extension() {
        assert_eq!(
            derive_small_path(Path::new("img/Divergence_CavityFlow.png")),
            PathBuf::from("img/Divergence_CavityFlow_small.png")
        );
        assert_eq!(
            derive_small_path(Path::new("raw")),
            PathBuf::from("raw_small")
        );
    }

    #[test]
    fn explicit_output_wins() {
        let params = ResizeParams {
            output: Some(PathBuf::from("out.jpg")),
            ..ResizeParams::default()
        };
        assert_eq!(params.output_path(), PathBuf::from("out.jpg"));
        assert_eq!(
            ResizeParams::default().output_path(),
            PathBuf::from("Divergence_CavityFlow_small.png")
        );
    }

    #[test]
    fn split_defaults_use_reference_layout() {
        let params = SplitParams::default();
        assert_eq!(params.input, PathBuf::from("docs/INSolver.md"));
        assert_eq!(params.output_dir, PathBuf::from("docs/sections"));
        assert_eq!(params.sections.len(), 8);
    }
}
