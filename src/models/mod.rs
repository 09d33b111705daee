//! Core data models for extension generation

pub mod config;
pub mod dialect;
pub mod manifest;
pub mod fileset;
pub mod error;

pub use config::*;
pub use dialect::*;
pub use manifest::*;
pub use fileset::*;
pub use error::*;
