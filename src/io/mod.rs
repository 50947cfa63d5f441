//! I/O layer: image decoding into `Raster`s, document reading, and `writers`
//! for encoded images and section files.
pub mod document;
pub use document::{read_document, write_section};

pub mod raster;
pub use raster::{convert_raster, dynamic_from_raster, raster_from_dynamic, read_raster};

pub mod writers;
pub use writers::write_raster;
