//! Generated file sets and packaged artifacts

use super::config::{FileKind, TargetPlatform};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(bytes) => bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FileContent::Binary(_))
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        FileContent::Text(text)
    }
}

impl From<&str> for FileContent {
    fn from(text: &str) -> Self {
        FileContent::Text(text.to_string())
    }
}

/// Every file of one platform's extension package, keyed by relative path.
///
/// Paths are kept sorted so that two runs over the same configuration
/// produce identical output, archive entry order included. Files supplied
/// with a declared kind keep it, whatever their name says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    platform: TargetPlatform,
    files: BTreeMap<String, FileContent>,
    kinds: BTreeMap<String, FileKind>,
}

impl FileSet {
    pub fn new(platform: TargetPlatform) -> Self {
        Self {
            platform,
            files: BTreeMap::new(),
            kinds: BTreeMap::new(),
        }
    }

    pub fn platform(&self) -> TargetPlatform {
        self.platform
    }

    /// Add a file, returning whatever was previously stored at `path`.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<FileContent>) -> Option<FileContent> {
        let path = path.into();
        self.kinds.remove(&path);
        self.files.insert(path, content.into())
    }

    /// Add a text file whose kind was declared rather than inferred.
    pub fn insert_typed(&mut self, path: impl Into<String>, text: impl Into<String>, kind: FileKind) -> Option<FileContent> {
        let path = path.into();
        self.kinds.insert(path.clone(), kind);
        self.files.insert(path, FileContent::Text(text.into()))
    }

    pub fn kind(&self, path: &str) -> Option<FileKind> {
        self.kinds.get(path).copied()
    }

    pub fn get(&self, path: &str) -> Option<&FileContent> {
        self.files.get(path)
    }

    pub fn text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(FileContent::as_text)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileContent)> {
        self.files.iter().map(|(path, content)| (path.as_str(), content))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_size(&self) -> usize {
        self.files.values().map(FileContent::len).sum()
    }
}

/// A packaged, downloadable archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
