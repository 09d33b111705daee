//! WebAssembly bindings for the extension generator
//!
//! Configurations cross the boundary as JSON text in the same shape the CLI
//! reads from disk; archives come back as bytes.

use crate::ai::{self, AiConfiguration};
use crate::generator::{FileSetGenerator, ManifestOptions, MANIFEST_FILE};
use crate::models::{Configuration, FileSet, TargetPlatform};
use crate::packager::{self, ArchivePlan};
use crate::parser::parse_configuration;
use crate::preview;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format!($($t)*))))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, error))
}

fn parse_platform(platform: &str) -> Result<TargetPlatform, JsValue> {
    match platform {
        "chromium" | "chrome" => Ok(TargetPlatform::Chromium),
        "firefox" => Ok(TargetPlatform::Firefox),
        other => Err(JsValue::from_str(&format!("Unknown platform: {}", other))),
    }
}

fn load(config_json: &str) -> Result<Configuration, JsValue> {
    parse_configuration(config_json).map_err(|e| js_error("Invalid configuration", e))
}

fn generator(chromium_host_permissions: bool) -> FileSetGenerator {
    FileSetGenerator::new(ManifestOptions {
        chromium_host_permissions,
    })
}

fn file_set(config_json: &str, platform: &str) -> Result<FileSet, JsValue> {
    let config = load(config_json)?;
    generator(false)
        .generate(&config, parse_platform(platform)?)
        .map_err(|e| js_error("Generation failed", e))
}

fn plan(config_json: &str, chromium_host_permissions: bool) -> Result<ArchivePlan, JsValue> {
    let config = load(config_json)?;
    ArchivePlan::build(&config, &generator(chromium_host_permissions))
        .map_err(|e| js_error("Generation failed", e))
}

/// The manifest.json text for one platform
#[wasm_bindgen]
pub fn compile_manifest(
    config_json: &str,
    platform: &str,
    chromium_host_permissions: bool,
) -> Result<String, JsValue> {
    let config = load(config_json)?;
    let files = generator(chromium_host_permissions)
        .generate(&config, parse_platform(platform)?)
        .map_err(|e| js_error("Generation failed", e))?;

    files
        .text(MANIFEST_FILE)
        .map(str::to_string)
        .ok_or_else(|| JsValue::from_str("manifest.json was not generated"))
}

/// Download for one platform: `{name}-{slug}.zip` bytes
#[wasm_bindgen]
pub fn generate_zip(
    config_json: &str,
    platform: &str,
    chromium_host_permissions: bool,
) -> Result<Vec<u8>, JsValue> {
    let plan = plan(config_json, chromium_host_permissions)?;
    let artifact = packager::build_platform_archive(&plan, parse_platform(platform)?)
        .map_err(|e| js_error("Failed to create ZIP", e))?;

    console_log!("Built {} ({} bytes)", artifact.file_name, artifact.bytes.len());
    Ok(artifact.bytes)
}

/// One archive with a folder per selected platform
#[wasm_bindgen]
pub fn generate_bundle(config_json: &str, chromium_host_permissions: bool) -> Result<Vec<u8>, JsValue> {
    let plan = plan(config_json, chromium_host_permissions)?;
    let artifact = packager::build_bundle(&plan).map_err(|e| js_error("Failed to create ZIP", e))?;

    console_log!("Built {} ({} bytes)", artifact.file_name, artifact.bytes.len());
    Ok(artifact.bytes)
}

/// Download file name for one platform
#[wasm_bindgen]
pub fn artifact_name(config_json: &str, platform: &str) -> Result<String, JsValue> {
    let plan = plan(config_json, false)?;
    Ok(plan.artifact_name(parse_platform(platform)?))
}

/// `{ path, language, content }` as JSON
#[wasm_bindgen]
pub fn preview_code(config_json: &str, platform: &str, path: &str) -> Result<String, JsValue> {
    let files = file_set(config_json, platform)?;
    let view = preview::code_view(&files, path)
        .ok_or_else(|| JsValue::from_str(&format!("{} was not generated", path)))?;
    serde_json::to_string(&view).map_err(|e| js_error("Failed to serialize preview", e))
}

/// HTML suitable for an iframe `srcdoc`
#[wasm_bindgen]
pub fn preview_live(config_json: &str, platform: &str, path: &str) -> Result<String, JsValue> {
    let files = file_set(config_json, platform)?;
    Ok(preview::live_view(&files, path))
}

/// File list for the preview selector, as a JSON array
#[wasm_bindgen]
pub fn list_files(config_json: &str, platform: &str) -> Result<String, JsValue> {
    let files = file_set(config_json, platform)?;
    let paths: Vec<&str> = files.paths().collect();
    serde_json::to_string(&paths).map_err(|e| js_error("Failed to serialize file list", e))
}

#[wasm_bindgen]
pub fn generation_prompt(description: &str) -> Result<String, JsValue> {
    ai::generation_prompt(description).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn regeneration_prompt(change: &str, config_json: &str) -> Result<String, JsValue> {
    let config = load(config_json)?;
    ai::regeneration_prompt(change, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply a completion response to the current configuration and return the
/// new configuration JSON. Nothing is applied unless the result generates.
#[wasm_bindgen]
pub fn apply_ai_response(response_json: &str, current_config_json: &str) -> Result<String, JsValue> {
    let value: serde_json::Value =
        serde_json::from_str(response_json).map_err(|e| js_error("AI response is not JSON", e))?;
    let proposed: AiConfiguration = ai::parse_response(value).map_err(|e| JsValue::from_str(&e.to_string()))?;

    // No form state yet: target every platform
    let current = if current_config_json.trim().is_empty() {
        Configuration {
            targets: TargetPlatform::ALL.iter().copied().collect(),
            ..Configuration::default()
        }
    } else {
        load(current_config_json)?
    };
    let updated = proposed.apply_to(&current);

    ArchivePlan::build(&updated, &generator(false)).map_err(|e| js_error("Generation failed", e))?;

    console_log!("Applied AI configuration for {}", updated.name);
    serde_json::to_string(&updated).map_err(|e| js_error("Failed to serialize configuration", e))
}
