//! Immutable per-run archive plans

use crate::generator::FileSetGenerator;
use crate::models::{Configuration, FileSet, GeneratorError, TargetPlatform};
use crate::utils::sanitize_archive_name;
use crate::validator::validate_configuration;
use std::collections::BTreeMap;

/// The outcome of one generation run: a FileSet per selected platform.
///
/// Plans are never extended after creation. A new run yields a new plan and
/// every download builds its container from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePlan {
    folder_name: String,
    file_sets: BTreeMap<TargetPlatform, FileSet>,
}

impl ArchivePlan {
    pub fn new(folder_name: impl Into<String>, file_sets: impl IntoIterator<Item = FileSet>) -> Self {
        Self {
            folder_name: folder_name.into(),
            file_sets: file_sets
                .into_iter()
                .map(|files| (files.platform(), files))
                .collect(),
        }
    }

    /// Validate `config` and generate every selected platform.
    pub fn build(config: &Configuration, generator: &FileSetGenerator) -> Result<Self, GeneratorError> {
        validate_configuration(config)?;

        let file_sets = config
            .targets
            .iter()
            .map(|platform| generator.generate(config, *platform))
            .collect::<Result<Vec<_>, _>>()?;

        let plan = Self::new(sanitize_archive_name(&config.name), file_sets);
        tracing::info!(
            folder = %plan.folder_name,
            platforms = plan.file_sets.len(),
            "archive plan ready"
        );
        Ok(plan)
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn platforms(&self) -> impl Iterator<Item = TargetPlatform> + '_ {
        self.file_sets.keys().copied()
    }

    pub fn file_set(&self, platform: TargetPlatform) -> Option<&FileSet> {
        self.file_sets.get(&platform)
    }

    pub fn file_sets(&self) -> impl Iterator<Item = &FileSet> {
        self.file_sets.values()
    }

    /// Download name for one platform: `{name}-{slug}.zip`.
    pub fn artifact_name(&self, platform: TargetPlatform) -> String {
        format!("{}-{}.zip", self.folder_name, platform.slug())
    }

    pub fn bundle_name(&self) -> String {
        format!("{}.zip", self.folder_name)
    }
}
