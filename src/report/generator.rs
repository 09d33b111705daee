//! Markdown generation report

use crate::generator::ManifestOptions;
use crate::models::{Configuration, FeatureKind, PermissionKind, TargetPlatform};
use crate::packager::ArchivePlan;
use crate::utils::gecko_extension_id;

/// Things worth telling the user about a plan before they load it.
pub fn collect_notes(config: &Configuration, plan: &ArchivePlan, options: ManifestOptions) -> Vec<String> {
    let mut notes = Vec::new();
    let has_platform = |platform| plan.file_set(platform).is_some();

    if config.has_feature(FeatureKind::ContentScript) {
        let settings = &config.content_script_settings;
        if !settings.match_all && settings.url_patterns.is_empty() {
            notes.push("Content script has no URL patterns, so it will not run on any page".to_string());
        }
        if has_platform(TargetPlatform::Chromium) && !options.chromium_host_permissions {
            notes.push(
                "Chromium manifest does not list host_permissions for the content script; \
                 enable host permissions if the script needs cross-origin access"
                    .to_string(),
            );
        }
    }

    if has_platform(TargetPlatform::Firefox) {
        notes.push(format!(
            "Firefox add-on id `{}` is a placeholder; replace it before publishing",
            gecko_extension_id(&config.name)
        ));
        if config.has_permission(PermissionKind::WebRequest) {
            notes.push("Firefox manifest also requests `webRequestBlocking`".to_string());
        }
    }

    notes
}

pub fn generate_markdown_report(config: &Configuration, plan: &ArchivePlan, options: ManifestOptions) -> String {
    let mut report = String::new();

    report.push_str("# Extension Generation Report\n\n");

    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Extension**: {} v{}\n", config.name, config.version));
    if !config.author.is_empty() {
        report.push_str(&format!("- **Author**: {}\n", config.author));
    }
    let platforms: Vec<_> = plan.platforms().map(TargetPlatform::as_str).collect();
    report.push_str(&format!("- **Platforms**: {}\n", platforms.join(", ")));
    report.push_str(&format!(
        "- **Features**: {}\n",
        join_or_none(config.features.iter().map(|f| f.as_str()))
    ));
    report.push_str(&format!(
        "- **Permissions**: {}\n\n",
        join_or_none(config.permissions.iter().map(|p| p.as_str()))
    ));

    for files in plan.file_sets() {
        let platform = files.platform();
        report.push_str(&format!(
            "## {} (manifest v{})\n\n",
            platform,
            platform.dialect().manifest_version
        ));
        report.push_str(&format!("Download: `{}`\n\n", plan.artifact_name(platform)));
        report.push_str("| File | Size |\n");
        report.push_str("|------|------|\n");
        for (path, content) in files.iter() {
            report.push_str(&format!("| `{}` | {} B |\n", path, content.len()));
        }
        report.push_str(&format!(
            "\n**Total**: {} files, {} B\n\n",
            files.len(),
            files.total_size()
        ));
    }

    let notes = collect_notes(config, plan, options);
    if !notes.is_empty() {
        report.push_str("## Notes\n\n");
        for note in notes {
            report.push_str(&format!("- {}\n", note));
        }
        report.push('\n');
    }

    report.push_str("## Next Steps\n\n");
    report.push_str("1. Load the unpacked folder in each browser's extension page\n");
    report.push_str("2. Fill in the generated handlers with your own logic\n");
    report.push_str("3. Replace placeholder icons and ids before publishing\n");

    report
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}
