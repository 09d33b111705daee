//! Browser Extension Generator
//!
//! A library for turning a declarative extension configuration into
//! ready-to-load Chromium (MV3) and Firefox (MV2) packages: manifest, boilerplate
//! pages and scripts, icon and any extra files, zipped per platform.
//! An optional completion backend can propose or revise the configuration.

pub mod models;
pub mod utils;
pub mod validator;
pub mod generator;
pub mod packager;
pub mod parser;
pub mod preview;
pub mod ai;
pub mod session;
pub mod report;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use models::{Configuration, FeatureKind, FileSet, GeneratorError, Manifest, PermissionKind, TargetPlatform};
pub use generator::{compile_manifest, generate_file_set, FileSetGenerator, ManifestOptions};
pub use packager::ArchivePlan;
pub use session::Session;

/// Main entry point: validate `config` and generate every selected platform.
pub fn generate_extension(
    config: &Configuration,
    options: ManifestOptions,
) -> Result<ArchivePlan, GeneratorError> {
    ArchivePlan::build(config, &FileSetGenerator::new(options))
}
