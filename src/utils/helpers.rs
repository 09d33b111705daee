//! Helper utility functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything outside [a-z0-9] in a lowercased name
    static ref NON_ID_CHAR: Regex = Regex::new(r"[^a-z0-9]").unwrap();

    // Characters that cannot appear in an archive folder or download name
    static ref NON_ARCHIVE_CHAR: Regex = Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).unwrap();
}

/// Firefox add-on id derived from the extension name.
///
/// Each character outside `[a-z0-9]` becomes `-`, so `"Test! Ext"` yields
/// `test--ext@example.com`. Uniqueness and DNS validity are not checked.
pub fn gecko_extension_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    format!("{}@example.com", NON_ID_CHAR.replace_all(&lowered, "-"))
}

/// Omnibox keyword: the first whitespace-delimited word of the name, lowercased.
pub fn omnibox_keyword(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Name usable as an archive folder and download file stem.
pub fn sanitize_archive_name(name: &str) -> String {
    let cleaned = NON_ARCHIVE_CHAR.replace_all(name.trim(), "-");
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "extension".to_string()
    } else {
        cleaned.into_owned()
    }
}

/// Escape text for interpolation into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
