//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant that concerns a file carries its path so the CLI can report
//! failures without extra context.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source image has zero width")]
    ZeroWidth,

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Target dimensions {width}x{height} are degenerate")]
    DegenerateTarget { width: u32, height: u32 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Resize error: {0}")]
    Resize(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }

    pub(crate) fn encode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Encode {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}
