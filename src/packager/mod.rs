//! Archive planning, building and extraction

pub mod plan;
pub mod builder;
pub mod extractor;

pub use builder::{build_bundle, build_platform_archive, write_artifact, write_directory};
pub use extractor::{archive_folders, read_archive};
pub use plan::ArchivePlan;
