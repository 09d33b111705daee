//! In-memory generation session: current configuration plus the latest plan

use crate::ai::{generation_prompt, parse_response, regeneration_prompt, CompletionBackend};
use crate::generator::{FileSetGenerator, ManifestOptions};
use crate::models::{Artifact, Configuration, GeneratorError, TargetPlatform, ValidationError};
use crate::packager::{build_bundle, build_platform_archive, ArchivePlan};
use std::collections::BTreeSet;

/// Holds what the user is currently working on.
///
/// Every run builds a complete plan for a candidate configuration first and
/// only then replaces the current state, so a failed run changes nothing.
#[derive(Debug, Clone, Default)]
pub struct Session {
    generator: FileSetGenerator,
    current: Option<Configuration>,
    plan: Option<ArchivePlan>,
}

impl Session {
    pub fn new(options: ManifestOptions) -> Self {
        Self {
            generator: FileSetGenerator::new(options),
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&Configuration> {
        self.current.as_ref()
    }

    pub fn plan(&self) -> Option<&ArchivePlan> {
        self.plan.as_ref()
    }

    pub fn generate(&mut self, config: Configuration) -> Result<&ArchivePlan, GeneratorError> {
        let plan = ArchivePlan::build(&config, &self.generator)?;
        self.current = Some(config);
        Ok(&*self.plan.insert(plan))
    }

    /// Ask the backend for a fresh configuration.
    ///
    /// `targets` and any icon already in the session are kept; the AI schema
    /// carries neither.
    pub async fn generate_from_prompt<B: CompletionBackend>(
        &mut self,
        backend: &B,
        description: &str,
        targets: BTreeSet<TargetPlatform>,
    ) -> Result<&ArchivePlan, GeneratorError> {
        let prompt = generation_prompt(description)?;
        let proposed = parse_response(backend.complete(&prompt).await?)?;

        let base = Configuration {
            targets,
            icon: self.current.as_ref().and_then(|config| config.icon.clone()),
            ..Configuration::default()
        };
        tracing::info!(name = %proposed.name, "applying generated configuration");
        self.generate(proposed.apply_to(&base))
    }

    /// Ask the backend to patch the current configuration.
    pub async fn regenerate<B: CompletionBackend>(
        &mut self,
        backend: &B,
        change: &str,
    ) -> Result<&ArchivePlan, GeneratorError> {
        if change.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt.into());
        }
        let current = self
            .current
            .as_ref()
            .ok_or(ValidationError::NoCurrentConfiguration)?;

        let prompt = regeneration_prompt(change, current)?;
        let patched = parse_response(backend.complete(&prompt).await?)?.apply_to(current);

        tracing::info!(name = %patched.name, "applying regenerated configuration");
        self.generate(patched)
    }

    /// Build the download for one platform from the latest plan.
    pub fn download(&self, platform: TargetPlatform) -> Result<Artifact, GeneratorError> {
        build_platform_archive(self.latest_plan()?, platform)
    }

    pub fn download_bundle(&self) -> Result<Artifact, GeneratorError> {
        build_bundle(self.latest_plan()?)
    }

    fn latest_plan(&self) -> Result<&ArchivePlan, GeneratorError> {
        self.plan
            .as_ref()
            .ok_or_else(|| ValidationError::NoCurrentConfiguration.into())
    }
}
