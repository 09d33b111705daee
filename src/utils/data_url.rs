//! `data:` URL encoding for uploaded icons

use crate::models::GeneratorError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATA_URL: Regex = Regex::new(r"(?s)^data:([^,]*?)(;base64)?,(.*)$").unwrap();
}

/// A decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

pub fn decode(url: &str) -> Result<DataUrl, GeneratorError> {
    let captures = DATA_URL
        .captures(url.trim())
        .ok_or_else(|| GeneratorError::InvalidIcon("not a data: URL".to_string()))?;

    let mime_type = captures.get(1).map_or("", |m| m.as_str()).to_string();
    let payload = captures.get(3).map_or("", |m| m.as_str());

    if captures.get(2).is_none() {
        return Err(GeneratorError::InvalidIcon(
            "data: URL payload is not base64 encoded".to_string(),
        ));
    }

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| GeneratorError::InvalidIcon(format!("bad base64 payload: {}", e)))?;

    Ok(DataUrl { mime_type, bytes })
}
