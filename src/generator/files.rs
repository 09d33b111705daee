//! File-set generation: manifest, icon, feature templates and extra files

use super::manifest::{ManifestCompiler, ManifestOptions};
use super::templates::{self, ICON_FILE};
use crate::models::{Configuration, FileContent, FileSet, GeneratorError, TargetPlatform};
use crate::utils::data_url;
use crate::validator::validate_contents;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Default)]
pub struct FileSetGenerator {
    compiler: ManifestCompiler,
}

impl FileSetGenerator {
    pub fn new(options: ManifestOptions) -> Self {
        Self {
            compiler: ManifestCompiler::new(options),
        }
    }

    pub fn compiler(&self) -> &ManifestCompiler {
        &self.compiler
    }

    /// Produce every file of the package for `platform`.
    ///
    /// The target set is not consulted here; callers decide which platforms
    /// to generate for.
    pub fn generate(
        &self,
        config: &Configuration,
        platform: TargetPlatform,
    ) -> Result<FileSet, GeneratorError> {
        validate_contents(config)?;

        let mut manifest = self.compiler.compile(config, platform);
        let mut files = FileSet::new(platform);

        if let Some(icon) = &config.icon {
            let decoded = data_url::decode(&icon.data)?;
            files.insert(ICON_FILE, FileContent::Binary(decoded.bytes));
            manifest.attach_icon(ICON_FILE);
        }

        files.insert(MANIFEST_FILE, serde_json::to_string_pretty(&manifest)?);

        for feature in &config.features {
            for template in templates::templates_for(*feature) {
                tracing::debug!(%platform, path = template.path, "rendering template");
                files.insert(template.path, (template.render)(config));
            }
        }

        for (name, extra) in &config.extra_files {
            tracing::debug!(%platform, path = %name, "adding extra file");
            files.insert_typed(name.as_str(), extra.content.as_str(), extra.kind);
        }

        tracing::info!(
            %platform,
            files = files.len(),
            bytes = files.total_size(),
            "generated file set"
        );
        Ok(files)
    }
}

/// Generate with default manifest options.
pub fn generate_file_set(
    config: &Configuration,
    platform: TargetPlatform,
) -> Result<FileSet, GeneratorError> {
    FileSetGenerator::default().generate(config, platform)
}
