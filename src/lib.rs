#![doc = r##"
docprep — small helpers for preparing project documentation.

Two independent jobs live here:

- **Image downsizing**: decode one raster image, scale it to a fixed width
  while keeping the aspect ratio (height is truncated, never rounded), resample
  with Lanczos3, and write it next to the original.
- **Section splitting**: walk a master Markdown document line by line and
  write every section that starts at a known heading line into its own file.

Both power the `docprep` CLI and can be embedded in your own Rust code.

Resize an image
---------------
```rust,no_run
use std::path::PathBuf;
use docprep::{resize_image_file, ResizeParams};

fn main() -> docprep::Result<()> {
    let params = ResizeParams {
        input: PathBuf::from("Divergence_CavityFlow.png"),
        max_width: 400,
        ..ResizeParams::default()
    };
    let report = resize_image_file(&params)?;
    println!("{} -> {}", report.source, report.target);
    Ok(())
}
```

Split a document
----------------
```rust,no_run
use std::path::PathBuf;
use docprep::{split_document, SectionMap, SplitParams};

fn main() -> docprep::Result<()> {
    let params = SplitParams {
        input: PathBuf::from("docs/INSolver.md"),
        output_dir: PathBuf::from("docs/sections"),
        sections: SectionMap::insolver(),
    };
    let report = split_document(&params)?;
    println!("wrote {} file(s)", report.files().len());
    Ok(())
}
```

In-memory splitting
-------------------
```rust
use docprep::{split_text, SectionMap};

let map = SectionMap::insolver();
let sections = split_text("# Introduction\nText A\n# Results\nText B\n", &map);
assert_eq!(sections[0].contents(), "# Introduction\nText A\n");
assert_eq!(sections[1].file_name, "results.md");
```

Error handling
--------------
All public functions return `docprep::Result<T>`; match on `docprep::Error`
to tell a missing document (`Error::NotFound`) from an unreadable image
(`Error::Decode`) or a failed write (`Error::Encode`, `Error::Write`).

Useful modules
--------------
- [`api`] — high-level entry points and run reports.
- [`core`] — target-size computation, resampling, and the section splitter.
- [`io`] — image decoding, document reading, and writers.
- [`types`] — `Raster`, `PixelLayout`, `TargetDimensions`, `ResampleFilter`.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::{ResizeParams, SplitParams};
pub use core::processing::resize::{calculate_target_dimensions, resize_raster};
pub use core::processing::sections::{Section, SectionMap, SectionSplitter, split_text};
pub use error::{Error, Result};
pub use types::{PixelLayout, Raster, ResampleFilter, TargetDimensions};

pub use api::{
    ResizeReport, SplitReport, WrittenSection, resize_image_file, split_document,
};
