//! Configuration documents (JSON or JSON5)

use crate::models::{Configuration, GeneratorError};
use std::path::Path;

/// Parse a configuration from JSON5 text. Plain JSON is a subset.
pub fn parse_configuration(content: &str) -> Result<Configuration, GeneratorError> {
    // json5 cannot hand enum-typed map keys to serde directly, so go through
    // a JSON value first.
    let value: serde_json::Value = json5::from_str(content)
        .map_err(|e| GeneratorError::InvalidConfiguration(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| GeneratorError::InvalidConfiguration(e.to_string()))
}

pub fn load_configuration(path: impl AsRef<Path>) -> Result<Configuration, GeneratorError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
    let config = parse_configuration(&content)?;
    tracing::debug!(path = %path.display(), name = %config.name, "loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureKind, FileKind, PermissionKind, TargetPlatform};

    #[test]
    fn test_parse_json5_with_comments() {
        let content = r#"{
            // identity
            name: "Tab Tidy",
            description: "Keeps tabs tidy",
            version: "0.2.0",
            browsers: { chromium: true, firefox: false },
            features: { popup: true, contentScript: true },
            permissions: { tabs: true },
            contentScriptSettings: { urlPatterns: ["https://*.example.com/*"], runAtStart: true },
            extraFiles: {
                "lib/tidy.js": { content: "// tidy", type: "javascript" },
            },
        }"#;

        let config = parse_configuration(content).unwrap();
        assert_eq!(config.name, "Tab Tidy");
        assert!(config.targets.contains(&TargetPlatform::Chromium));
        assert!(!config.targets.contains(&TargetPlatform::Firefox));
        assert!(config.has_feature(FeatureKind::ContentScript));
        assert!(config.has_permission(PermissionKind::Tabs));
        assert!(config.content_script_settings.run_at_start);
        assert_eq!(config.extra_files["lib/tidy.js"].kind, FileKind::Script);
    }

    #[test]
    fn test_unknown_feature_is_rejected() {
        let err = parse_configuration(r#"{ name: "x", features: { sidebar: true } }"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_syntax_error_is_reported() {
        assert!(matches!(
            parse_configuration("{ name: "),
            Err(GeneratorError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_configuration("/definitely/not/here.json5"),
            Err(GeneratorError::Io { .. })
        ));
    }
}
