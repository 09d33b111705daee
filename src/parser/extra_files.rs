//! Extra files collected from a directory tree

use crate::models::{ExtraFile, FileKind, GeneratorError};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Collect scripts, pages and stylesheets below `dir`, keyed by their
/// `/`-separated path relative to it. Other files are skipped.
pub fn load_extra_files(dir: impl AsRef<Path>) -> Result<BTreeMap<String, ExtraFile>, GeneratorError> {
    let dir = dir.as_ref();
    let mut files = BTreeMap::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"));
            GeneratorError::io(path, source)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = match path.strip_prefix(dir) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => continue,
        };

        let Some(kind) = FileKind::from_file_name(&relative) else {
            tracing::warn!(path = %relative, "skipping file of unsupported type");
            continue;
        };

        let content = match std::fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => {
                    tracing::warn!(path = %relative, "skipping file that is not UTF-8");
                    continue;
                }
            },
            Err(e) => return Err(GeneratorError::io(path, e)),
        };

        files.insert(relative, ExtraFile { content, kind });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_extra_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/tags.js"), "// tags").unwrap();
        fs::write(dir.path().join("panel.html"), "<p>panel</p>").unwrap();
        fs::write(dir.path().join("theme.css"), "body {}").unwrap();
        fs::write(dir.path().join("notes.md"), "# ignored").unwrap();

        let files = load_extra_files(dir.path()).unwrap();

        assert_eq!(
            files.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["lib/tags.js", "panel.html", "theme.css"]
        );
        assert_eq!(files["lib/tags.js"].kind, FileKind::Script);
        assert_eq!(files["panel.html"].kind, FileKind::Markup);
        assert_eq!(files["theme.css"].content, "body {}");
    }

    #[test]
    fn test_missing_directory() {
        assert!(matches!(
            load_extra_files("/definitely/not/here"),
            Err(GeneratorError::Io { .. })
        ));
    }
}
