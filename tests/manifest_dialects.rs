//! Manifest dialect properties for Chromium (MV3) and Firefox (MV2)

use extforge::{
    compile_manifest, generate_file_set, Configuration, FeatureKind, PermissionKind, TargetPlatform,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn config() -> Configuration {
    Configuration::new("My Cool Extension", "Does cool things", "1.2.3")
        .with_target(TargetPlatform::Chromium)
        .with_target(TargetPlatform::Firefox)
}

fn manifest_json(config: &Configuration, platform: TargetPlatform) -> Value {
    let files = generate_file_set(config, platform).unwrap();
    serde_json::from_str(files.text("manifest.json").unwrap()).unwrap()
}

fn everything() -> Configuration {
    let mut config = config();
    config.author = "Alice".to_string();
    config.homepage = "https://example.com".to_string();
    config.content_script_settings.url_patterns = vec!["https://example.com/*".to_string()];
    for feature in FeatureKind::ALL {
        config.features.insert(*feature);
    }
    for permission in PermissionKind::ALL {
        config.permissions.insert(*permission);
    }
    config
}

#[test_case(TargetPlatform::Chromium, 3; "chromium is mv3")]
#[test_case(TargetPlatform::Firefox, 2; "firefox is mv2")]
fn test_manifest_version(platform: TargetPlatform, expected: u64) {
    for config in [config(), everything()] {
        assert_eq!(manifest_json(&config, platform)["manifest_version"], json!(expected));
    }
}

#[test_case(TargetPlatform::Chromium, &["webRequest"]; "chromium")]
#[test_case(TargetPlatform::Firefox, &["webRequest", "webRequestBlocking"]; "firefox")]
fn test_web_request_translation(platform: TargetPlatform, expected: &[&str]) {
    let config = config().with_permission(PermissionKind::WebRequest);
    assert_eq!(compile_manifest(&config, platform).permissions, expected);
}

#[test_case(PermissionKind::Storage, "storage")]
#[test_case(PermissionKind::Tabs, "tabs")]
#[test_case(PermissionKind::ActiveTab, "activeTab")]
#[test_case(PermissionKind::Notifications, "notifications")]
#[test_case(PermissionKind::Cookies, "cookies")]
#[test_case(PermissionKind::Downloads, "downloads")]
#[test_case(PermissionKind::History, "history")]
#[test_case(PermissionKind::Bookmarks, "bookmarks")]
#[test_case(PermissionKind::Proxy, "proxy")]
fn test_plain_permissions_are_verbatim(permission: PermissionKind, expected: &str) {
    let config = config().with_permission(permission);
    for platform in TargetPlatform::ALL {
        assert_eq!(compile_manifest(&config, *platform).permissions, vec![expected]);
    }
}

#[test_case(TargetPlatform::Chromium, "contextMenus")]
#[test_case(TargetPlatform::Firefox, "menus")]
fn test_context_menu_permission(platform: TargetPlatform, expected: &str) {
    let config = config().with_feature(FeatureKind::ContextMenu);
    assert_eq!(compile_manifest(&config, platform).permissions, vec![expected]);
}

#[test]
fn test_omnibox_keyword() {
    let config = config().with_feature(FeatureKind::Omnibox);
    let manifest = manifest_json(&config, TargetPlatform::Chromium);
    assert_eq!(manifest["omnibox"], json!({ "keyword": "my" }));
}

#[test]
fn test_gecko_id() {
    let config = Configuration::new("Test! Ext", "d", "1").with_target(TargetPlatform::Firefox);
    let manifest = manifest_json(&config, TargetPlatform::Firefox);
    assert_eq!(
        manifest["browser_specific_settings"],
        json!({ "gecko": { "id": "test--ext@example.com" } })
    );
    assert!(manifest_json(&config, TargetPlatform::Chromium)
        .get("browser_specific_settings")
        .is_none());
}

#[test]
fn test_content_script_match_all() {
    let mut config = config().with_feature(FeatureKind::ContentScript);
    config.content_script_settings.match_all = true;
    config.content_script_settings.url_patterns = vec!["https://ignored.example/*".to_string()];

    let firefox = manifest_json(&config, TargetPlatform::Firefox);
    assert_eq!(firefox["permissions"], json!(["<all_urls>"]));
    assert_eq!(firefox["content_scripts"][0]["matches"], json!(["<all_urls>"]));
    assert_eq!(firefox["content_scripts"][0]["run_at"], json!("document_idle"));

    let chromium = manifest_json(&config, TargetPlatform::Chromium);
    assert_eq!(chromium["permissions"], json!([]));
    assert_eq!(chromium["content_scripts"][0]["matches"], json!(["<all_urls>"]));
    assert!(chromium.get("host_permissions").is_none());
}

#[test]
fn test_content_script_patterns() {
    let mut config = config().with_feature(FeatureKind::ContentScript);
    config.content_script_settings.url_patterns = vec!["https://example.com/*".to_string()];
    config.content_script_settings.run_at_start = true;

    let firefox = manifest_json(&config, TargetPlatform::Firefox);
    assert_eq!(firefox["permissions"], json!(["https://example.com/*"]));
    assert_eq!(
        firefox["content_scripts"],
        json!([{
            "matches": ["https://example.com/*"],
            "js": ["content.js"],
            "run_at": "document_start"
        }])
    );

    let chromium = manifest_json(&config, TargetPlatform::Chromium);
    assert_eq!(chromium["permissions"], json!([]));
    assert_eq!(chromium["content_scripts"][0]["matches"], json!(["https://example.com/*"]));
}

#[test]
fn test_full_chromium_manifest() {
    let manifest = manifest_json(&everything(), TargetPlatform::Chromium);
    assert_eq!(
        manifest,
        json!({
            "manifest_version": 3,
            "name": "My Cool Extension",
            "description": "Does cool things",
            "version": "1.2.3",
            "author": "Alice",
            "homepage_url": "https://example.com",
            "permissions": [
                "storage", "tabs", "activeTab", "notifications", "webRequest",
                "cookies", "downloads", "history", "bookmarks", "proxy", "contextMenus"
            ],
            "action": { "default_popup": "popup.html" },
            "options_ui": { "page": "options.html", "open_in_tab": true },
            "background": { "service_worker": "background.js", "type": "module" },
            "content_scripts": [{
                "matches": ["https://example.com/*"],
                "js": ["content.js"],
                "run_at": "document_idle"
            }],
            "devtools_page": "devtools.html",
            "commands": {
                "_execute_action": {
                    "suggested_key": { "default": "Ctrl+Shift+Y" },
                    "description": "Opens the extension popup"
                }
            },
            "omnibox": { "keyword": "my" }
        })
    );
}

#[test]
fn test_full_firefox_manifest() {
    let manifest = manifest_json(&everything(), TargetPlatform::Firefox);
    assert_eq!(
        manifest,
        json!({
            "manifest_version": 2,
            "name": "My Cool Extension",
            "description": "Does cool things",
            "version": "1.2.3",
            "author": "Alice",
            "homepage_url": "https://example.com",
            "permissions": [
                "storage", "tabs", "activeTab", "notifications", "webRequest", "webRequestBlocking",
                "cookies", "downloads", "history", "bookmarks", "proxy",
                "https://example.com/*", "menus"
            ],
            "browser_action": { "default_popup": "popup.html" },
            "options_ui": { "page": "options.html", "open_in_tab": true, "browser_style": true },
            "background": { "scripts": ["background.js"] },
            "content_scripts": [{
                "matches": ["https://example.com/*"],
                "js": ["content.js"],
                "run_at": "document_idle"
            }],
            "devtools_page": "devtools.html",
            "commands": {
                "_execute_action": {
                    "suggested_key": { "default": "Ctrl+Shift+Y" },
                    "description": "Opens the extension popup"
                }
            },
            "omnibox": { "keyword": "my" },
            "browser_specific_settings": { "gecko": { "id": "my-cool-extension@example.com" } }
        })
    );
}

#[test]
fn test_manifest_key_order_matches_layout() {
    let files = generate_file_set(&everything(), TargetPlatform::Firefox).unwrap();
    let text = files.text("manifest.json").unwrap();
    let position = |key: &str| text.find(&format!("\"{}\"", key)).unwrap();

    let keys = [
        "manifest_version",
        "name",
        "description",
        "version",
        "permissions",
        "author",
        "homepage_url",
        "browser_action",
        "options_ui",
        "background",
        "content_scripts",
        "devtools_page",
        "commands",
        "omnibox",
        "browser_specific_settings",
    ];
    for pair in keys.windows(2) {
        assert!(position(pair[0]) < position(pair[1]), "{} before {}", pair[0], pair[1]);
    }
}
