//! Shared string and encoding helpers

pub mod helpers;
pub mod data_url;

pub use helpers::*;
