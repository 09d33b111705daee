//! Read-only views of generated files for inspection

use crate::models::{FileContent, FileKind, FileSet};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Json,
    Html,
    JavaScript,
    Css,
    PlainText,
}

impl Language {
    pub fn for_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".json") {
            return Language::Json;
        }
        FileKind::from_file_name(path).map_or(Language::PlainText, Language::for_kind)
    }

    pub fn for_kind(kind: FileKind) -> Self {
        match kind {
            FileKind::Script => Language::JavaScript,
            FileKind::Markup => Language::Html,
            FileKind::Style => Language::Css,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::Html => "html",
            Language::JavaScript => "javascript",
            Language::Css => "css",
            Language::PlainText => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeView {
    pub path: String,
    pub language: Language,
    pub content: String,
}

/// Source text of one file with its highlighting language.
///
/// A declared extra-file kind wins over the extension. Binary files get a
/// one-line placeholder instead of their bytes.
pub fn code_view(files: &FileSet, path: &str) -> Option<CodeView> {
    let content = match files.get(path)? {
        FileContent::Text(text) => text.clone(),
        FileContent::Binary(bytes) => format!("<binary file, {} bytes>", bytes.len()),
    };

    Some(CodeView {
        path: path.to_string(),
        language: files
            .kind(path)
            .map_or_else(|| Language::for_path(path), Language::for_kind),
        content,
    })
}

pub const PREVIEW_UNAVAILABLE: &str = r#"<div style="padding: 20px; font-family: sans-serif; color: #666;">
  <h3>Preview not available</h3>
  <p>Live preview is only available for HTML files (popup.html and options.html)</p>
  <p>Please use the Code view to see the content of this file.</p>
</div>
"#;

/// Self-contained HTML for an iframe `srcdoc`.
///
/// Only the popup and options pages render; their stylesheet is inlined
/// ahead of `</head>`.
pub fn live_view(files: &FileSet, path: &str) -> String {
    let stylesheet = match path {
        "popup.html" => "popup.css",
        "options.html" => "options.css",
        _ => return PREVIEW_UNAVAILABLE.to_string(),
    };

    match files.text(path) {
        Some(page) => {
            let css = files.text(stylesheet).unwrap_or_default();
            page.replacen("</head>", &format!("<style>{}</style></head>", css), 1)
        }
        None => PREVIEW_UNAVAILABLE.to_string(),
    }
}
