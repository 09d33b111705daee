//! Icon loading from image files

use crate::models::{GeneratorError, Icon};
use crate::utils::data_url;
use std::path::Path;

pub const MAX_ICON_BYTES: usize = 1024 * 1024;

pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// Read an image fully into memory and wrap it as a data URL.
pub fn load_icon(path: impl AsRef<Path>) -> Result<Icon, GeneratorError> {
    let path = path.as_ref();
    let mime_type = mime_type_for(path).ok_or_else(|| {
        GeneratorError::InvalidIcon(format!("{} is not a supported image type", path.display()))
    })?;

    let bytes = std::fs::read(path).map_err(|e| GeneratorError::io(path, e))?;
    icon_from_bytes(mime_type, &bytes)
}

pub fn icon_from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Icon, GeneratorError> {
    if bytes.is_empty() {
        return Err(GeneratorError::InvalidIcon("image is empty".to_string()));
    }
    if bytes.len() > MAX_ICON_BYTES {
        return Err(GeneratorError::InvalidIcon(format!(
            "image is {} bytes, the limit is {}",
            bytes.len(),
            MAX_ICON_BYTES
        )));
    }

    Ok(Icon {
        data: data_url::encode(mime_type, bytes),
        mime_type: mime_type.to_string(),
    })
}
