//! Core building blocks: target-size computation and resampling, the
//! heading-driven section splitter, and the parameter structures consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
