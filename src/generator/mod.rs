//! Manifest compilation and package file generation

pub mod manifest;
pub mod files;
pub mod templates;

pub use files::{generate_file_set, FileSetGenerator, MANIFEST_FILE};
pub use manifest::{compile_manifest, ManifestCompiler, ManifestOptions};
