//! AI-assisted generation against an in-memory completion backend

use extforge::ai::CompletionBackend;
use extforge::models::{ExtraFile, FileKind, Icon, ValidationError};
use extforge::utils::data_url;
use extforge::{Configuration, FeatureKind, GeneratorError, PermissionKind, Session, TargetPlatform};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Replays canned responses and records the prompts it was sent.
struct ScriptedBackend {
    response: Result<Value, String>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    fn answering(response: Value) -> Self {
        Self {
            response: Ok(response),
            prompts: RefCell::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str) -> Result<Value, GeneratorError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.response.clone().map_err(GeneratorError::UpstreamRequest)
    }
}

fn toggles(on: &[&str], all: &[&str]) -> Value {
    all.iter()
        .map(|key| (key.to_string(), Value::Bool(on.contains(key))))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

fn features(on: &[&str]) -> Value {
    toggles(
        on,
        &["popup", "options", "background", "contentScript", "devtools", "contextMenu", "commands", "omnibox"],
    )
}

fn permissions(on: &[&str]) -> Value {
    toggles(
        on,
        &[
            "storage", "tabs", "activeTab", "notifications", "webRequest", "cookies", "downloads",
            "history", "bookmarks", "proxy",
        ],
    )
}

fn tab_counter(description: &str) -> Value {
    json!({
        "name": "Tab Counter",
        "description": description,
        "version": "1.0.0",
        "author": "Alice",
        "homepage": "",
        "features": features(&["popup", "background"]),
        "permissions": permissions(&["tabs", "storage"]),
        "contentScriptSettings": { "urlPatterns": [], "matchAll": false, "runAtStart": false },
        "additionalFiles": [
            { "filename": "counter.js", "content": "export const count = 0;\n", "type": "javascript" }
        ]
    })
}

fn all_targets() -> BTreeSet<TargetPlatform> {
    TargetPlatform::ALL.iter().copied().collect()
}

async fn session_with_counter() -> Session {
    let mut session = Session::default();
    let backend = ScriptedBackend::answering(tab_counter("Counts open tabs"));
    session
        .generate_from_prompt(&backend, "count my tabs", all_targets())
        .await
        .unwrap();
    session
}

#[tokio::test]
async fn test_generate_from_prompt_builds_every_target() {
    let session = session_with_counter().await;

    let config = session.current().unwrap();
    assert_eq!(config.name, "Tab Counter");
    assert_eq!(config.targets, all_targets());
    assert!(config.has_feature(FeatureKind::Popup));
    assert!(config.has_permission(PermissionKind::Tabs));
    assert_eq!(config.extra_files["counter.js"].content, "export const count = 0;\n");

    let plan = session.plan().unwrap();
    assert_eq!(plan.platforms().collect::<Vec<_>>(), TargetPlatform::ALL.to_vec());
    for platform in TargetPlatform::ALL {
        let files = plan.file_set(*platform).unwrap();
        assert!(files.contains("popup.html"));
        assert!(files.contains("background.js"));
        assert!(files.contains("counter.js"));
    }
}

#[tokio::test]
async fn test_prompt_carries_the_description() {
    let backend = ScriptedBackend::answering(tab_counter("Counts open tabs"));
    let mut session = Session::default();
    session
        .generate_from_prompt(&backend, "count my tabs", all_targets())
        .await
        .unwrap();

    let prompts = backend.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("count my tabs"));
}

#[tokio::test]
async fn test_empty_description_never_reaches_the_backend() {
    let backend = ScriptedBackend::answering(tab_counter("unused"));
    let mut session = Session::default();

    let err = session
        .generate_from_prompt(&backend, "   ", all_targets())
        .await
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Validation(ValidationError::EmptyPrompt)));
    assert_eq!(backend.calls(), 0);
    assert!(session.current().is_none());
}

#[tokio::test]
async fn test_regenerate_keeps_fields_the_response_echoes() {
    let mut session = session_with_counter().await;
    let backend = ScriptedBackend::answering(tab_counter("Counts open tabs per window"));

    session.regenerate(&backend, "mention windows").await.unwrap();

    let config = session.current().unwrap();
    assert_eq!(config.author, "Alice");
    assert_eq!(config.description, "Counts open tabs per window");
    assert_eq!(config.targets, all_targets());

    let prompt = &backend.prompts.borrow()[0];
    assert!(prompt.contains("mention windows"));
    assert!(prompt.contains("\"author\": \"Alice\""));
}

#[tokio::test]
async fn test_regenerate_keeps_fields_the_response_leaves_out() {
    let mut session = Session::default();
    let mut config = Configuration::new("Tab Counter", "Counts open tabs", "1.0.0")
        .with_target(TargetPlatform::Chromium)
        .with_feature(FeatureKind::Popup)
        .with_feature(FeatureKind::ContentScript)
        .with_extra_file(
            "counter.js",
            ExtraFile {
                content: "export const count = 0;\n".to_string(),
                kind: FileKind::Script,
            },
        );
    config.author = "Alice".to_string();
    config.homepage = "https://alice.dev".to_string();
    config.content_script_settings.url_patterns = vec!["https://example.com/*".to_string()];
    session.generate(config.clone()).unwrap();

    let backend = ScriptedBackend::answering(json!({
        "name": "Tab Counter",
        "description": "Counts tabs per window",
        "version": "1.0.0",
        "features": features(&["popup", "contentScript"]),
        "permissions": permissions(&["tabs"])
    }));
    session.regenerate(&backend, "count per window").await.unwrap();

    let updated = session.current().unwrap();
    assert_eq!(updated.description, "Counts tabs per window");
    assert_eq!(updated.author, "Alice");
    assert_eq!(updated.homepage, "https://alice.dev");
    assert_eq!(updated.content_script_settings, config.content_script_settings);
    assert_eq!(updated.extra_files, config.extra_files);
    assert!(session
        .plan()
        .unwrap()
        .file_set(TargetPlatform::Chromium)
        .unwrap()
        .contains("counter.js"));
}

#[tokio::test]
async fn test_regenerate_keeps_targets_and_icon() {
    let mut session = Session::default();
    let mut config = Configuration::new("Iconic", "Has an icon", "1.0.0")
        .with_target(TargetPlatform::Firefox)
        .with_feature(FeatureKind::Popup);
    config.icon = Some(Icon {
        data: data_url::encode("image/png", &[1, 2, 3]),
        mime_type: "image/png".to_string(),
    });
    session.generate(config.clone()).unwrap();

    let backend = ScriptedBackend::answering(tab_counter("Now counts tabs"));
    session.regenerate(&backend, "count tabs instead").await.unwrap();

    let updated = session.current().unwrap();
    assert_eq!(updated.targets, config.targets);
    assert_eq!(updated.icon, config.icon);
    assert!(session.plan().unwrap().file_set(TargetPlatform::Chromium).is_none());
    assert!(session
        .plan()
        .unwrap()
        .file_set(TargetPlatform::Firefox)
        .unwrap()
        .contains("icon128.png"));
}

#[tokio::test]
async fn test_regenerate_without_configuration() {
    let mut session = Session::default();
    let backend = ScriptedBackend::answering(tab_counter("unused"));

    let err = session.regenerate(&backend, "make it blue").await.unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::Validation(ValidationError::NoCurrentConfiguration)
    ));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_regenerate_with_empty_change() {
    let mut session = session_with_counter().await;
    let backend = ScriptedBackend::answering(tab_counter("unused"));

    let err = session.regenerate(&backend, "").await.unwrap_err();
    assert!(matches!(err, GeneratorError::Validation(ValidationError::EmptyPrompt)));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_changes_nothing() {
    let mut session = session_with_counter().await;
    let before_config = session.current().cloned();
    let before_plan = session.plan().cloned();

    let backend = ScriptedBackend::failing("503 Service Unavailable");
    let err = session.regenerate(&backend, "add a context menu").await.unwrap_err();

    assert!(matches!(err, GeneratorError::UpstreamRequest(_)));
    assert_eq!(session.current().cloned(), before_config);
    assert_eq!(session.plan().cloned(), before_plan);
}

#[tokio::test]
async fn test_malformed_response_changes_nothing() {
    let mut session = session_with_counter().await;
    let before_config = session.current().cloned();
    let before_plan = session.plan().cloned();

    for response in [
        json!("not an object"),
        json!({ "description": "no name" }),
        json!({ "name": "No toggles" }),
        json!({
            "name": "Unknown feature",
            "features": { "teleport": true },
            "permissions": permissions(&[])
        }),
    ] {
        let backend = ScriptedBackend::answering(response);
        let err = session.regenerate(&backend, "break it").await.unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidAiResponse(_)), "{:?}", err);
    }

    assert_eq!(session.current().cloned(), before_config);
    assert_eq!(session.plan().cloned(), before_plan);
}

#[tokio::test]
async fn test_response_that_fails_validation_changes_nothing() {
    let mut session = session_with_counter().await;
    let before_config = session.current().cloned();

    let mut response = tab_counter("Counts open tabs");
    response["version"] = Value::Null;
    let backend = ScriptedBackend::answering(response);

    let err = session.regenerate(&backend, "drop the version").await.unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::Validation(ValidationError::MissingField("version"))
    ));
    assert_eq!(session.current().cloned(), before_config);
}

#[tokio::test]
async fn test_downloads_follow_the_latest_plan() {
    let mut session = session_with_counter().await;
    let first = session.download(TargetPlatform::Chromium).unwrap();
    assert_eq!(first.file_name, "Tab Counter-chrome.zip");

    let mut renamed = tab_counter("Counts open tabs");
    renamed["name"] = json!("Tab Tally");
    let backend = ScriptedBackend::answering(renamed);
    session.regenerate(&backend, "rename it").await.unwrap();

    assert_eq!(session.download(TargetPlatform::Chromium).unwrap().file_name, "Tab Tally-chrome.zip");
    assert_eq!(session.download_bundle().unwrap().file_name, "Tab Tally.zip");
}
