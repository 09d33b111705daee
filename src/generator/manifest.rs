//! Manifest compilation for Chromium (MV3) and Firefox (MV2)

use crate::models::{
    feature_permission_rule, permission_rule, Action, ActionKey, Background, BackgroundStyle,
    BrowserSpecificSettings, Command, Configuration, ContentScript, FeatureKind, GeckoSettings,
    HostGrant, Manifest, Omnibox, OptionsUi, TargetPlatform,
};
use crate::utils::{gecko_extension_id, omnibox_keyword};
use std::collections::BTreeMap;

pub const EXECUTE_ACTION_COMMAND: &str = "_execute_action";
pub const EXECUTE_ACTION_KEY: &str = "Ctrl+Shift+Y";
pub const EXECUTE_ACTION_DESCRIPTION: &str = "Opens the extension popup";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestOptions {
    /// Write content-script patterns to `host_permissions` for Chromium.
    ///
    /// Off by default: Chromium manifests then carry no host grant at all,
    /// matching what the generator has always produced.
    pub chromium_host_permissions: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ManifestCompiler {
    options: ManifestOptions,
}

impl ManifestCompiler {
    pub fn new(options: ManifestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ManifestOptions {
        self.options
    }

    /// Compile the manifest for one platform. Assumes a validated configuration;
    /// degenerate input yields degenerate values rather than errors.
    pub fn compile(&self, config: &Configuration, platform: TargetPlatform) -> Manifest {
        let dialect = platform.dialect();
        let mut manifest = Manifest::new(
            dialect.manifest_version,
            &config.name,
            &config.description,
            &config.version,
        );

        manifest.author = non_empty(&config.author);
        manifest.homepage_url = non_empty(&config.homepage);

        // 1. Permission toggles
        for permission in &config.permissions {
            push_all(&mut manifest.permissions, permission_rule(*permission).entries(platform));
        }

        // 2. Host grants for the content script
        if config.has_feature(FeatureKind::ContentScript) {
            self.grant_hosts(&mut manifest, config, dialect.host_grant);
        }

        // 3. Permissions implied by features
        for feature in &config.features {
            if let Some(rule) = feature_permission_rule(*feature) {
                push_all(&mut manifest.permissions, rule.entries(platform));
            }
        }

        // 4. Feature blocks
        if config.has_feature(FeatureKind::Popup) {
            let action = Some(Action {
                default_popup: "popup.html".to_string(),
            });
            match dialect.action_key {
                ActionKey::Action => manifest.action = action,
                ActionKey::BrowserAction => manifest.browser_action = action,
            }
        }

        if config.has_feature(FeatureKind::Options) {
            manifest.options_ui = Some(OptionsUi {
                page: "options.html".to_string(),
                open_in_tab: true,
                browser_style: dialect.options_browser_style.then_some(true),
            });
        }

        if config.has_feature(FeatureKind::Background) {
            manifest.background = Some(match dialect.background {
                BackgroundStyle::ServiceWorker => Background {
                    service_worker: Some("background.js".to_string()),
                    scripts: None,
                    type_: Some("module".to_string()),
                },
                BackgroundStyle::Scripts => Background {
                    service_worker: None,
                    scripts: Some(vec!["background.js".to_string()]),
                    type_: None,
                },
            });
        }

        if config.has_feature(FeatureKind::ContentScript) {
            let settings = &config.content_script_settings;
            manifest.content_scripts.push(ContentScript {
                matches: settings.matches(),
                js: vec!["content.js".to_string()],
                run_at: settings.run_at().to_string(),
            });
        }

        if config.has_feature(FeatureKind::Devtools) {
            manifest.devtools_page = Some("devtools.html".to_string());
        }

        if config.has_feature(FeatureKind::Commands) {
            let mut suggested_key = BTreeMap::new();
            suggested_key.insert("default".to_string(), EXECUTE_ACTION_KEY.to_string());

            let mut commands = BTreeMap::new();
            commands.insert(
                EXECUTE_ACTION_COMMAND.to_string(),
                Command {
                    suggested_key,
                    description: EXECUTE_ACTION_DESCRIPTION.to_string(),
                },
            );
            manifest.commands = Some(commands);
        }

        if config.has_feature(FeatureKind::Omnibox) {
            manifest.omnibox = Some(Omnibox {
                keyword: omnibox_keyword(&config.name),
            });
        }

        // 5. Platform identity
        if dialect.gecko_id {
            manifest.browser_specific_settings = Some(BrowserSpecificSettings {
                gecko: Some(GeckoSettings {
                    id: gecko_extension_id(&config.name),
                }),
            });
        }

        manifest
    }

    fn grant_hosts(&self, manifest: &mut Manifest, config: &Configuration, grant: HostGrant) {
        let hosts = config.content_script_settings.matches();
        if hosts.is_empty() {
            tracing::warn!(
                extension = %config.name,
                "content script enabled without url patterns; it will match no pages"
            );
        }

        match grant {
            HostGrant::InPermissions => manifest.permissions.extend(hosts),
            HostGrant::HostPermissions if self.options.chromium_host_permissions => {
                manifest.host_permissions.extend(hosts)
            }
            HostGrant::HostPermissions => {}
        }
    }
}

/// Compile with default options.
pub fn compile_manifest(config: &Configuration, platform: TargetPlatform) -> Manifest {
    ManifestCompiler::default().compile(config, platform)
}

fn push_all(target: &mut Vec<String>, entries: &[&str]) {
    target.extend(entries.iter().map(|entry| entry.to_string()));
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
