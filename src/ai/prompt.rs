//! Prompts sent to the completion service

use super::response::AiConfiguration;
use crate::models::{Configuration, GeneratorError, ValidationError};

const RESPONSE_SCHEMA: &str = r#"{
  "name": string,
  "description": string,
  "version": string,
  "author": string,
  "homepage": string,
  "features": {
    "popup": boolean,
    "options": boolean,
    "background": boolean,
    "contentScript": boolean,
    "devtools": boolean,
    "contextMenu": boolean,
    "commands": boolean,
    "omnibox": boolean
  },
  "permissions": {
    "storage": boolean,
    "tabs": boolean,
    "activeTab": boolean,
    "notifications": boolean,
    "webRequest": boolean,
    "cookies": boolean,
    "downloads": boolean,
    "history": boolean,
    "bookmarks": boolean,
    "proxy": boolean
  },
  "contentScriptSettings": {
    "urlPatterns": string[],
    "matchAll": boolean,
    "runAtStart": boolean
  },
  "additionalFiles": [
    {
      "filename": string,
      "content": string,
      "type": "javascript" | "html" | "css"
    }
  ]
}"#;

const EXAMPLE_RESPONSE: &str = r#"{
  "name": "Quick Bookmarker",
  "description": "Efficiently save and organize bookmarks with tags",
  "version": "1.0.0",
  "author": "AI Assistant",
  "homepage": "https://example.com",
  "features": {
    "popup": true,
    "options": true,
    "background": true,
    "contentScript": true,
    "devtools": false,
    "contextMenu": true,
    "commands": true,
    "omnibox": true
  },
  "permissions": {
    "storage": true,
    "bookmarks": true,
    "tabs": true,
    "activeTab": true,
    "notifications": false,
    "webRequest": false,
    "cookies": false,
    "downloads": false,
    "history": false,
    "proxy": false
  },
  "contentScriptSettings": {
    "urlPatterns": ["*://*/*"],
    "matchAll": true,
    "runAtStart": false
  },
  "additionalFiles": [
    {
      "filename": "bookmark-manager.js",
      "content": "// Bookmark management functionality...",
      "type": "javascript"
    }
  ]
}"#;

fn require_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyPrompt)
    } else {
        Ok(trimmed)
    }
}

/// Prompt for a brand-new configuration from a free-text description.
pub fn generation_prompt(description: &str) -> Result<String, ValidationError> {
    let description = require_text(description)?;
    Ok(format!(
        "Generate a complete browser extension configuration based on this description: \"{}\"\n\n\
         Generate a response matching this format:\n{}\n\n\
         Example response:\n{}",
        description, RESPONSE_SCHEMA, EXAMPLE_RESPONSE
    ))
}

/// Prompt asking for `current` to be patched according to `change`.
pub fn regeneration_prompt(change: &str, current: &Configuration) -> Result<String, GeneratorError> {
    let change = require_text(change)?;
    let serialized = serde_json::to_string_pretty(&AiConfiguration::from_configuration(current))?;
    Ok(format!(
        "Modify the following extension configuration based on this change request: \"{}\"\n\n\
         Current configuration:\n{}\n\n\
         Generate an updated configuration that maintains existing functionality while \
         incorporating the requested changes. Respond with the complete configuration in \
         the same format.",
        change, serialized
    ))
}
