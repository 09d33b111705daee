//! End-to-end generation: file sets, validation, archives and directory output

use extforge::models::{ExtraFile, FileContent, FileKind, Icon, ValidationError};
use extforge::packager::{build_bundle, build_platform_archive, read_archive, write_directory};
use extforge::preview::{code_view, Language};
use extforge::utils::data_url;
use extforge::{
    generate_extension, generate_file_set, Configuration, FeatureKind, GeneratorError,
    ManifestOptions, PermissionKind, TargetPlatform,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];

fn full_config() -> Configuration {
    let mut config = Configuration::new("Tab Tidy", "Keeps tabs tidy", "0.3.0")
        .with_target(TargetPlatform::Chromium)
        .with_target(TargetPlatform::Firefox)
        .with_permission(PermissionKind::Storage)
        .with_permission(PermissionKind::Tabs)
        .with_permission(PermissionKind::Notifications)
        .with_extra_file(
            "helper.js",
            ExtraFile {
                content: "export function help() {\n  return 'ü';\n}\n".to_string(),
                kind: FileKind::Script,
            },
        );
    for feature in FeatureKind::ALL {
        config.features.insert(*feature);
    }
    config.content_script_settings.match_all = true;
    config.icon = Some(Icon {
        data: data_url::encode("image/png", PNG),
        mime_type: "image/png".to_string(),
    });
    config
}

#[test_case(TargetPlatform::Chromium)]
#[test_case(TargetPlatform::Firefox)]
fn test_file_set_contents(platform: TargetPlatform) {
    let files = generate_file_set(&full_config(), platform).unwrap();
    assert_eq!(
        files.paths().collect::<Vec<_>>(),
        vec![
            "background.js",
            "content-styles.css",
            "content.js",
            "contextMenu.js",
            "devtools.html",
            "devtools.js",
            "helper.js",
            "icon128.png",
            "manifest.json",
            "omnibox.js",
            "options.css",
            "options.html",
            "options.js",
            "popup.css",
            "popup.html",
            "popup.js",
        ]
    );
}

#[test_case(TargetPlatform::Chromium)]
#[test_case(TargetPlatform::Firefox)]
fn test_generation_is_idempotent(platform: TargetPlatform) {
    let config = full_config();
    let first = generate_file_set(&config, platform).unwrap();
    let second = generate_file_set(&config, platform).unwrap();
    assert_eq!(first, second);

    let plan = generate_extension(&config, ManifestOptions::default()).unwrap();
    let again = generate_extension(&config, ManifestOptions::default()).unwrap();
    assert_eq!(
        build_platform_archive(&plan, platform).unwrap(),
        build_platform_archive(&again, platform).unwrap()
    );
}

#[test]
fn test_extra_file_round_trip() {
    let config = full_config();
    for platform in TargetPlatform::ALL {
        let files = generate_file_set(&config, *platform).unwrap();
        assert_eq!(
            files.get("helper.js"),
            Some(&FileContent::Text(config.extra_files["helper.js"].content.clone()))
        );
    }
}

#[test]
fn test_extra_file_kind_survives_generation() {
    let config = full_config().with_extra_file(
        "bookmark-manager",
        ExtraFile {
            content: "export const tags = [];\n".to_string(),
            kind: FileKind::Script,
        },
    );
    let files = generate_file_set(&config, TargetPlatform::Firefox).unwrap();

    assert_eq!(files.kind("bookmark-manager"), Some(FileKind::Script));
    let view = code_view(&files, "bookmark-manager").unwrap();
    assert_eq!(view.language, Language::JavaScript);
    assert_eq!(view.content, "export const tags = [];\n");
}

#[test]
fn test_icon_is_binary_and_referenced() {
    let files = generate_file_set(&full_config(), TargetPlatform::Firefox).unwrap();
    assert_eq!(files.get("icon128.png"), Some(&FileContent::Binary(PNG.to_vec())));

    let manifest: serde_json::Value = serde_json::from_str(files.text("manifest.json").unwrap()).unwrap();
    assert_eq!(manifest["icons"]["128"], "icon128.png");
}

#[test]
fn test_without_icon_there_is_no_icons_key() {
    let mut config = full_config();
    config.icon = None;
    let files = generate_file_set(&config, TargetPlatform::Chromium).unwrap();
    assert!(!files.contains("icon128.png"));
    assert!(!files.text("manifest.json").unwrap().contains("\"icons\""));
}

#[test_case("name")]
#[test_case("description")]
#[test_case("version")]
fn test_missing_identity_blocks_generation(field: &str) {
    let mut config = full_config();
    match field {
        "name" => config.name.clear(),
        "description" => config.description.clear(),
        _ => config.version.clear(),
    }

    let err = generate_extension(&config, ManifestOptions::default()).unwrap_err();
    assert!(matches!(err, GeneratorError::Validation(ValidationError::MissingField(f)) if f == field));
    assert!(generate_file_set(&config, TargetPlatform::Chromium).is_err());
}

#[test]
fn test_no_target_blocks_generation() {
    let mut config = full_config();
    config.targets.clear();
    assert!(matches!(
        generate_extension(&config, ManifestOptions::default()),
        Err(GeneratorError::Validation(ValidationError::NoTargetPlatform))
    ));
}

#[test_case("manifest.json")]
#[test_case("popup.html")]
#[test_case("icon128.png")]
fn test_reserved_extra_file_names_are_rejected(name: &str) {
    let config = full_config().with_extra_file(
        name,
        ExtraFile {
            content: String::new(),
            kind: FileKind::Markup,
        },
    );
    assert!(matches!(
        generate_extension(&config, ManifestOptions::default()),
        Err(GeneratorError::Validation(ValidationError::ReservedFileName(_)))
    ));
}

#[test]
fn test_platform_archive_layout() {
    let plan = generate_extension(&full_config(), ManifestOptions::default()).unwrap();
    let artifact = build_platform_archive(&plan, TargetPlatform::Firefox).unwrap();
    assert_eq!(artifact.file_name, "Tab Tidy-firefox.zip");

    let entries = read_archive(&artifact.bytes).unwrap();
    assert!(entries.keys().all(|name| name.starts_with("Tab Tidy/")));
    assert_eq!(entries["Tab Tidy/icon128.png"], PNG.to_vec());
    assert_eq!(
        String::from_utf8(entries["Tab Tidy/helper.js"].clone()).unwrap(),
        full_config().extra_files["helper.js"].content
    );

    let manifest: serde_json::Value = serde_json::from_slice(&entries["Tab Tidy/manifest.json"]).unwrap();
    assert_eq!(manifest["manifest_version"], 2);
}

#[test]
fn test_bundle_layout() {
    let plan = generate_extension(&full_config(), ManifestOptions::default()).unwrap();
    let artifact = build_bundle(&plan).unwrap();
    assert_eq!(artifact.file_name, "Tab Tidy.zip");

    let entries = read_archive(&artifact.bytes).unwrap();
    assert!(entries.contains_key("Tab Tidy-chrome/manifest.json"));
    assert!(entries.contains_key("Tab Tidy-firefox/manifest.json"));
}

#[test]
fn test_write_unpacked_directory() {
    let dir = TempDir::new().unwrap();
    let plan = generate_extension(&full_config(), ManifestOptions::default()).unwrap();
    let files = plan.file_set(TargetPlatform::Chromium).unwrap();

    write_directory(files, dir.path()).unwrap();

    assert_eq!(fs::read(dir.path().join("icon128.png")).unwrap(), PNG);
    let manifest = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
    assert_eq!(manifest, files.text("manifest.json").unwrap());
}

#[test]
fn test_popup_hooks_follow_toggles() {
    let minimal = Configuration::new("Plain", "d", "1")
        .with_target(TargetPlatform::Chromium)
        .with_feature(FeatureKind::Popup);
    let files = generate_file_set(&minimal, TargetPlatform::Chromium).unwrap();
    let html = files.text("popup.html").unwrap();
    assert!(html.contains("id=\"settingsBtn\""));
    assert!(!html.contains("id=\"contextMenuToggle\""));
    assert!(!html.contains("id=\"tabsList\""));

    let files = generate_file_set(&full_config(), TargetPlatform::Chromium).unwrap();
    let html = files.text("popup.html").unwrap();
    assert!(html.contains("id=\"contextMenuToggle\""));
    assert!(html.contains("id=\"tabsList\""));
    assert!(!html.contains("id=\"historyList\""));
}

#[test]
fn test_user_text_is_escaped_in_pages() {
    let mut config = full_config();
    config.name = "<b>Bold</b>".to_string();
    let files = generate_file_set(&config, TargetPlatform::Chromium).unwrap();
    let html = files.text("popup.html").unwrap();
    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    assert!(!html.contains("<b>Bold</b>"));
}
