//! Error taxonomy for generation, packaging and AI-assisted configuration

use std::path::PathBuf;
use thiserror::Error;

/// A configuration or request that cannot start a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("select at least one target browser")]
    NoTargetPlatform,

    #[error("extra file with an empty name")]
    EmptyFileName,

    #[error("extra file `{0}` would overwrite a generated file")]
    ReservedFileName(String),

    #[error("extra file `{0}` must be a relative path inside the package")]
    UnsafeFileName(String),

    #[error("describe the extension or the change you want first")]
    EmptyPrompt,

    #[error("nothing to regenerate: generate an extension first")]
    NoCurrentConfiguration,
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid icon: {0}")]
    InvalidIcon(String),

    #[error("AI request failed: {0}")]
    UpstreamRequest(String),

    #[error("AI response is not a usable configuration: {0}")]
    InvalidAiResponse(String),

    #[error("failed to build archive: {0}")]
    ArchiveBuild(String),

    #[error("failed to serialize manifest: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GeneratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<zip::result::ZipError> for GeneratorError {
    fn from(err: zip::result::ZipError) -> Self {
        GeneratorError::ArchiveBuild(err.to_string())
    }
}
