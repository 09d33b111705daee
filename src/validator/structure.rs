//! Structural validation

use crate::generator::templates;
use crate::models::{Configuration, ValidationError};

/// File names owned by the generator; extra files may not claim them.
pub const RESERVED_FILE_NAMES: &[&str] = &["manifest.json", templates::ICON_FILE];

pub fn validate_structure(config: &Configuration) -> Result<(), ValidationError> {
    validate_contents(config)?;

    if config.targets.is_empty() {
        return Err(ValidationError::NoTargetPlatform);
    }

    Ok(())
}

/// Everything except target selection: what a single-platform run needs.
pub fn validate_contents(config: &Configuration) -> Result<(), ValidationError> {
    validate_identity(config)?;
    validate_extra_files(config)?;
    Ok(())
}

fn validate_identity(config: &Configuration) -> Result<(), ValidationError> {
    // Check required fields
    if config.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }

    if config.description.trim().is_empty() {
        return Err(ValidationError::MissingField("description"));
    }

    if config.version.trim().is_empty() {
        return Err(ValidationError::MissingField("version"));
    }

    Ok(())
}

fn validate_extra_files(config: &Configuration) -> Result<(), ValidationError> {
    for filename in config.extra_files.keys() {
        if filename.trim().is_empty() {
            return Err(ValidationError::EmptyFileName);
        }

        if is_reserved(filename) {
            return Err(ValidationError::ReservedFileName(filename.clone()));
        }

        if !is_safe_relative_path(filename) {
            return Err(ValidationError::UnsafeFileName(filename.clone()));
        }
    }

    Ok(())
}

fn is_reserved(filename: &str) -> bool {
    RESERVED_FILE_NAMES.contains(&filename) || templates::all_template_paths().any(|path| path == filename)
}

fn is_safe_relative_path(filename: &str) -> bool {
    !filename.starts_with('/')
        && !filename.contains('\\')
        && !filename.contains(':')
        && filename.split('/').all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtraFile, FileKind, TargetPlatform};

    fn valid() -> Configuration {
        Configuration::new("Demo", "A demo", "1.0").with_target(TargetPlatform::Chromium)
    }

    fn script(content: &str) -> ExtraFile {
        ExtraFile {
            content: content.to_string(),
            kind: FileKind::Script,
        }
    }

    #[test]
    fn test_valid_configuration_passes() {
        assert_eq!(validate_structure(&valid()), Ok(()));
    }

    #[test]
    fn test_missing_required_fields() {
        let mut config = valid();
        config.name = "  ".to_string();
        assert_eq!(validate_structure(&config), Err(ValidationError::MissingField("name")));

        let mut config = valid();
        config.description.clear();
        assert_eq!(
            validate_structure(&config),
            Err(ValidationError::MissingField("description"))
        );

        let mut config = valid();
        config.version.clear();
        assert_eq!(validate_structure(&config), Err(ValidationError::MissingField("version")));
    }

    #[test]
    fn test_author_and_homepage_may_be_empty() {
        let config = valid();
        assert!(config.author.is_empty() && config.homepage.is_empty());
        assert_eq!(validate_structure(&config), Ok(()));
    }

    #[test]
    fn test_no_targets() {
        let config = Configuration::new("Demo", "A demo", "1.0");
        assert_eq!(validate_structure(&config), Err(ValidationError::NoTargetPlatform));
        assert_eq!(validate_contents(&config), Ok(()));
    }

    #[test]
    fn test_reserved_extra_file_names() {
        for name in ["manifest.json", "popup.js", "icon128.png", "content-styles.css"] {
            let config = valid().with_extra_file(name, script("x"));
            assert_eq!(
                validate_structure(&config),
                Err(ValidationError::ReservedFileName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_unsafe_extra_file_names() {
        for name in ["../escape.js", "/etc/passwd", "a//b.js", "dir\\file.js"] {
            let config = valid().with_extra_file(name, script("x"));
            assert_eq!(
                validate_structure(&config),
                Err(ValidationError::UnsafeFileName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_nested_extra_file_is_allowed() {
        let config = valid().with_extra_file("lib/helper.js", script("x"));
        assert_eq!(validate_structure(&config), Ok(()));
    }
}
