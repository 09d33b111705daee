//! Extension configuration: the structured record a generation run consumes

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::dialect::{Dialect, CHROMIUM, FIREFOX};

/// A browser family whose manifest dialect we can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    Chromium,
    Firefox,
}

impl TargetPlatform {
    pub const ALL: &'static [TargetPlatform] = &[TargetPlatform::Chromium, TargetPlatform::Firefox];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetPlatform::Chromium => "chromium",
            TargetPlatform::Firefox => "firefox",
        }
    }

    /// Short name used in download file names (`{name}-{slug}.zip`).
    pub fn slug(self) -> &'static str {
        match self {
            TargetPlatform::Chromium => "chrome",
            TargetPlatform::Firefox => "firefox",
        }
    }

    pub fn dialect(self) -> &'static Dialect {
        match self {
            TargetPlatform::Chromium => &CHROMIUM,
            TargetPlatform::Firefox => &FIREFOX,
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionKind {
    Storage,
    Tabs,
    ActiveTab,
    Notifications,
    WebRequest,
    Cookies,
    Downloads,
    History,
    Bookmarks,
    Proxy,
}

impl PermissionKind {
    pub const ALL: &'static [PermissionKind] = &[
        PermissionKind::Storage,
        PermissionKind::Tabs,
        PermissionKind::ActiveTab,
        PermissionKind::Notifications,
        PermissionKind::WebRequest,
        PermissionKind::Cookies,
        PermissionKind::Downloads,
        PermissionKind::History,
        PermissionKind::Bookmarks,
        PermissionKind::Proxy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionKind::Storage => "storage",
            PermissionKind::Tabs => "tabs",
            PermissionKind::ActiveTab => "activeTab",
            PermissionKind::Notifications => "notifications",
            PermissionKind::WebRequest => "webRequest",
            PermissionKind::Cookies => "cookies",
            PermissionKind::Downloads => "downloads",
            PermissionKind::History => "history",
            PermissionKind::Bookmarks => "bookmarks",
            PermissionKind::Proxy => "proxy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKind {
    Popup,
    Options,
    Background,
    ContentScript,
    Devtools,
    ContextMenu,
    Commands,
    Omnibox,
}

impl FeatureKind {
    pub const ALL: &'static [FeatureKind] = &[
        FeatureKind::Popup,
        FeatureKind::Options,
        FeatureKind::Background,
        FeatureKind::ContentScript,
        FeatureKind::Devtools,
        FeatureKind::ContextMenu,
        FeatureKind::Commands,
        FeatureKind::Omnibox,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKind::Popup => "popup",
            FeatureKind::Options => "options",
            FeatureKind::Background => "background",
            FeatureKind::ContentScript => "contentScript",
            FeatureKind::Devtools => "devtools",
            FeatureKind::ContextMenu => "contextMenu",
            FeatureKind::Commands => "commands",
            FeatureKind::Omnibox => "omnibox",
        }
    }
}

/// Keys that serialize as a `{ key: bool }` switchboard.
pub trait ToggleKey: Copy + Ord + Serialize + DeserializeOwned + 'static {
    const ALL: &'static [Self];
}

impl ToggleKey for TargetPlatform {
    const ALL: &'static [Self] = TargetPlatform::ALL;
}

impl ToggleKey for PermissionKind {
    const ALL: &'static [Self] = PermissionKind::ALL;
}

impl ToggleKey for FeatureKind {
    const ALL: &'static [Self] = FeatureKind::ALL;
}

/// Serde adapter: `BTreeSet<K>` <-> `{ "key": true, "other": false, ... }`.
///
/// Every known key is written out so that a serialized configuration shows the
/// full switchboard. Unknown keys are rejected on the way in.
pub(crate) mod toggle_map {
    use super::ToggleKey;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::{BTreeMap, BTreeSet};

    pub fn serialize<K, S>(set: &BTreeSet<K>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: ToggleKey,
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(K::ALL.len()))?;
        for key in K::ALL {
            map.serialize_entry(key, &set.contains(key))?;
        }
        map.end()
    }

    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<BTreeSet<K>, D::Error>
    where
        K: ToggleKey,
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<K, bool>::deserialize(deserializer)?;
        Ok(map.into_iter().filter_map(|(key, on)| on.then_some(key)).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentScriptSettings {
    #[serde(default)]
    pub url_patterns: Vec<String>,

    /// Ignore `url_patterns` and inject everywhere.
    #[serde(default)]
    pub match_all: bool,

    /// Inject at `document_start` instead of `document_idle`.
    #[serde(default)]
    pub run_at_start: bool,
}

impl ContentScriptSettings {
    /// Match patterns as they appear in the manifest.
    pub fn matches(&self) -> Vec<String> {
        if self.match_all {
            vec!["<all_urls>".to_string()]
        } else {
            self.url_patterns.clone()
        }
    }

    pub fn run_at(&self) -> &'static str {
        if self.run_at_start {
            "document_start"
        } else {
            "document_idle"
        }
    }
}

/// Uploaded icon, kept as a data URL exactly as the browser file reader produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub data: String,

    #[serde(rename = "type", default)]
    pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    #[serde(rename = "javascript", alias = "script")]
    Script,
    #[serde(rename = "html", alias = "markup")]
    Markup,
    #[serde(rename = "css", alias = "style")]
    Style,
}

impl FileKind {
    /// Infer a kind from a file name's extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())?;
        match extension.as_str() {
            "js" | "mjs" => Some(FileKind::Script),
            "html" | "htm" => Some(FileKind::Markup),
            "css" => Some(FileKind::Style),
            _ => None,
        }
    }
}

/// A file contributed alongside the template output, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraFile {
    pub content: String,

    #[serde(rename = "type")]
    pub kind: FileKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub homepage: String,

    #[serde(rename = "browsers", default, with = "toggle_map")]
    pub targets: BTreeSet<TargetPlatform>,

    #[serde(default, with = "toggle_map")]
    pub permissions: BTreeSet<PermissionKind>,

    #[serde(default, with = "toggle_map")]
    pub features: BTreeSet<FeatureKind>,

    #[serde(default)]
    pub content_script_settings: ContentScriptSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_files: BTreeMap<String, ExtraFile>,
}

impl Configuration {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, platform: TargetPlatform) -> Self {
        self.targets.insert(platform);
        self
    }

    pub fn with_permission(mut self, permission: PermissionKind) -> Self {
        self.permissions.insert(permission);
        self
    }

    pub fn with_feature(mut self, feature: FeatureKind) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn with_extra_file(mut self, filename: impl Into<String>, file: ExtraFile) -> Self {
        self.extra_files.insert(filename.into(), file);
        self
    }

    pub fn has_feature(&self, feature: FeatureKind) -> bool {
        self.features.contains(&feature)
    }

    pub fn has_permission(&self, permission: PermissionKind) -> bool {
        self.permissions.contains(&permission)
    }
}
