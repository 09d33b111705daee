//! Strict parsing of AI-proposed configurations

use crate::models::config::toggle_map;
use crate::models::{
    Configuration, ContentScriptSettings, ExtraFile, FeatureKind, FileKind, GeneratorError,
    PermissionKind,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// The configuration shape the completion service is asked to return.
///
/// Targets and the icon are not part of it; they stay with whoever holds the
/// current configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfiguration {
    pub name: String,

    #[serde(default, deserialize_with = "string_or_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "string_or_null", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, deserialize_with = "string_or_null", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "string_or_null", skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(with = "toggle_map")]
    pub features: BTreeSet<FeatureKind>,

    #[serde(with = "toggle_map")]
    pub permissions: BTreeSet<PermissionKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_script_settings: Option<ContentScriptSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_files: Option<Vec<AiFile>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiFile {
    pub filename: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

/// Present keys replace, `null` included (as empty). Absent keys stay `None`
/// through `#[serde(default)]` and leave the current value alone.
fn string_or_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Check a raw completion against the expected schema.
pub fn parse_response(value: Value) -> Result<AiConfiguration, GeneratorError> {
    if !value.is_object() {
        return Err(GeneratorError::InvalidAiResponse(format!(
            "expected a JSON object, got {}",
            kind_of(&value)
        )));
    }

    let parsed: AiConfiguration = serde_json::from_value(value)
        .map_err(|e| GeneratorError::InvalidAiResponse(e.to_string()))?;

    if parsed.name.trim().is_empty() {
        return Err(GeneratorError::InvalidAiResponse("`name` is empty".to_string()));
    }

    let mut seen = BTreeSet::new();
    for file in parsed.additional_files.iter().flatten() {
        if !seen.insert(file.filename.as_str()) {
            return Err(GeneratorError::InvalidAiResponse(format!(
                "`additionalFiles` lists {} twice",
                file.filename
            )));
        }
    }

    Ok(parsed)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl AiConfiguration {
    /// Project a configuration onto the AI schema.
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            name: config.name.clone(),
            description: Some(config.description.clone()),
            version: Some(config.version.clone()),
            author: Some(config.author.clone()),
            homepage: Some(config.homepage.clone()),
            features: config.features.clone(),
            permissions: config.permissions.clone(),
            content_script_settings: Some(config.content_script_settings.clone()),
            additional_files: Some(
                config
                    .extra_files
                    .iter()
                    .map(|(filename, file)| AiFile {
                        filename: filename.clone(),
                        content: file.content.clone(),
                        kind: file.kind,
                    })
                    .collect(),
            ),
        }
    }

    /// Overlay the response on `base`.
    ///
    /// Keys the response leaves out keep their current value; targets and
    /// icon always come from `base`. A present `additionalFiles` list
    /// replaces the extra files wholesale.
    pub fn apply_to(self, base: &Configuration) -> Configuration {
        let extra_files: BTreeMap<String, ExtraFile> = match self.additional_files {
            Some(files) => files
                .into_iter()
                .map(|file| {
                    (
                        file.filename,
                        ExtraFile {
                            content: file.content,
                            kind: file.kind,
                        },
                    )
                })
                .collect(),
            None => base.extra_files.clone(),
        };

        Configuration {
            name: self.name,
            description: self.description.unwrap_or_else(|| base.description.clone()),
            version: self.version.unwrap_or_else(|| base.version.clone()),
            author: self.author.unwrap_or_else(|| base.author.clone()),
            homepage: self.homepage.unwrap_or_else(|| base.homepage.clone()),
            targets: base.targets.clone(),
            permissions: self.permissions,
            features: self.features,
            content_script_settings: self
                .content_script_settings
                .unwrap_or_else(|| base.content_script_settings.clone()),
            icon: base.icon.clone(),
            extra_files,
        }
    }
}
