//! Command-line front end: typed form state, interactive mode, shared output

pub mod form;
pub mod interactive;

pub use form::FormState;
pub use interactive::run_interactive_mode;

use crate::generator::ManifestOptions;
use crate::models::Configuration;
use crate::packager::{self, ArchivePlan};
use crate::report;
use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};

/// What to write next to the per-platform archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub bundle: bool,
    pub unpacked: bool,
    pub report: bool,
}

/// Write archives (and optionally unpacked folders, a bundle and a report)
/// for a plan into `output_dir`. Returns every path written.
pub fn save_outputs(
    config: &Configuration,
    plan: &ArchivePlan,
    manifest_options: ManifestOptions,
    output_dir: &Path,
    outputs: OutputOptions,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for platform in plan.platforms() {
        let artifact = packager::build_platform_archive(plan, platform)?;
        written.push(packager::write_artifact(&artifact, output_dir)?);

        if outputs.unpacked {
            if let Some(files) = plan.file_set(platform) {
                let folder = output_dir.join(format!("{}-{}", plan.folder_name(), platform.slug()));
                packager::write_directory(files, &folder)?;
                written.push(folder);
            }
        }
    }

    if outputs.bundle {
        let artifact = packager::build_bundle(plan)?;
        written.push(packager::write_artifact(&artifact, output_dir)?);
    }

    if outputs.report {
        let path = output_dir.join(format!("{}-report.md", plan.folder_name()));
        let content = report::generate_markdown_report(config, plan, manifest_options);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

pub fn print_plan_summary(config: &Configuration, plan: &ArchivePlan, manifest_options: ManifestOptions) {
    println!("{}", "📊 Summary:".bold());
    println!("  - Extension: {} v{}", config.name, config.version);
    for files in plan.file_sets() {
        println!(
            "  - {}: {} files, {} bytes",
            files.platform().to_string().cyan(),
            files.len(),
            files.total_size()
        );
        for path in files.paths() {
            println!("      {}", path.dimmed());
        }
    }

    let notes = report::collect_notes(config, plan, manifest_options);
    if !notes.is_empty() {
        println!();
        println!("{}", "⚠️  Notes:".yellow().bold());
        for note in notes {
            println!("  - {}", note);
        }
    }
}

pub fn print_written(paths: &[PathBuf]) {
    println!("{}", "💾 Written:".bold());
    for path in paths {
        println!("  - {}", path.display());
    }
}
