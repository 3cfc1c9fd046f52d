//! Exported helper macros.

pub mod assert_within;
pub mod threshold;
