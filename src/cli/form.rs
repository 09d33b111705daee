//! Typed form state collected by the interactive CLI

use crate::models::{
    Configuration, ContentScriptSettings, ExtraFile, FeatureKind, Icon, PermissionKind,
    TargetPlatform,
};
use std::collections::{BTreeMap, BTreeSet};

/// Raw values as the user entered them.
///
/// URL patterns live in a multi-line text field; everything else already has
/// its final type. `to_configuration` is the only place form values become a
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub homepage: String,
    pub browsers: BTreeSet<TargetPlatform>,
    pub permissions: BTreeSet<PermissionKind>,
    pub features: BTreeSet<FeatureKind>,
    pub url_patterns: String,
    pub match_all: bool,
    pub run_at_start: bool,
    pub icon: Option<Icon>,
    pub extra_files: BTreeMap<String, ExtraFile>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            version: "1.0.0".to_string(),
            author: String::new(),
            homepage: String::new(),
            browsers: TargetPlatform::ALL.iter().copied().collect(),
            permissions: BTreeSet::new(),
            features: BTreeSet::new(),
            url_patterns: String::new(),
            match_all: false,
            run_at_start: false,
            icon: None,
            extra_files: BTreeMap::new(),
        }
    }
}

impl FormState {
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            author: self.author.clone(),
            homepage: self.homepage.clone(),
            targets: self.browsers.clone(),
            permissions: self.permissions.clone(),
            features: self.features.clone(),
            content_script_settings: ContentScriptSettings {
                url_patterns: self
                    .url_patterns
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
                match_all: self.match_all,
                run_at_start: self.run_at_start,
            },
            icon: self.icon.clone(),
            extra_files: self.extra_files.clone(),
        }
    }

    pub fn from_configuration(config: &Configuration) -> Self {
        let settings = &config.content_script_settings;
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            version: config.version.clone(),
            author: config.author.clone(),
            homepage: config.homepage.clone(),
            browsers: config.targets.clone(),
            permissions: config.permissions.clone(),
            features: config.features.clone(),
            url_patterns: settings.url_patterns.join("\n"),
            match_all: settings.match_all,
            run_at_start: settings.run_at_start,
            icon: config.icon.clone(),
            extra_files: config.extra_files.clone(),
        }
    }
}
