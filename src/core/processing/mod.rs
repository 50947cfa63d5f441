pub mod resize;
pub mod sections;
