//! Manifest document emitted for Chromium and Firefox
//!
//! Field order matches the order keys appear in the generated `manifest.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest_version: u8,
    pub name: String,
    pub description: String,
    pub version: String,

    #[serde(default)]
    pub permissions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_permissions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_action: Option<Action>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_ui: Option<OptionsUi>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_scripts: Vec<ContentScript>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtools_page: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<BTreeMap<String, Command>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omnibox: Option<Omnibox>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_specific_settings: Option<BrowserSpecificSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<BTreeMap<String, String>>,
}

impl Manifest {
    pub fn new(
        manifest_version: u8,
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            manifest_version,
            name: name.into(),
            description: description.into(),
            version: version.into(),
            author: None,
            homepage_url: None,
            permissions: Vec::new(),
            host_permissions: Vec::new(),
            action: None,
            browser_action: None,
            options_ui: None,
            background: None,
            content_scripts: Vec::new(),
            devtools_page: None,
            commands: None,
            omnibox: None,
            browser_specific_settings: None,
            icons: None,
        }
    }

    /// Reference the packaged 128px icon.
    pub fn attach_icon(&mut self, path: impl Into<String>) {
        self.icons
            .get_or_insert_with(BTreeMap::new)
            .insert("128".to_string(), path.into());
    }

    pub fn gecko_id(&self) -> Option<&str> {
        self.browser_specific_settings
            .as_ref()
            .and_then(|settings| settings.gecko.as_ref())
            .map(|gecko| gecko.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub default_popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsUi {
    pub page: String,
    pub open_in_tab: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_style: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_worker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Vec<String>>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScript {
    pub matches: Vec<String>,
    pub js: Vec<String>,
    pub run_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub suggested_key: BTreeMap<String, String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Omnibox {
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserSpecificSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gecko: Option<GeckoSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeckoSettings {
    pub id: String,
}
