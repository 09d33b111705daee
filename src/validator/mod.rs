//! Validation module

pub mod structure;

use crate::models::{Configuration, ValidationError};

/// Check everything a generation run needs before any file is produced.
pub fn validate_configuration(config: &Configuration) -> Result<(), ValidationError> {
    structure::validate_structure(config)
}

pub use structure::{validate_contents, RESERVED_FILE_NAMES};
