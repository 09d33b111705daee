//! Zip assembly and directory output

use super::plan::ArchivePlan;
use crate::models::{Artifact, FileSet, GeneratorError, TargetPlatform};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Component, Path};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

type Zip = ZipWriter<Cursor<Vec<u8>>>;

/// Zip one platform's files under a single `{name}/` folder.
pub fn build_platform_archive(
    plan: &ArchivePlan,
    platform: TargetPlatform,
) -> Result<Artifact, GeneratorError> {
    let files = plan.file_set(platform).ok_or_else(|| {
        GeneratorError::ArchiveBuild(format!("no files were generated for {}", platform))
    })?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    add_folder(&mut zip, plan.folder_name(), files)?;
    let bytes = zip.finish()?.into_inner();

    let artifact = Artifact {
        file_name: plan.artifact_name(platform),
        bytes,
    };
    tracing::info!(
        file = %artifact.file_name,
        bytes = artifact.bytes.len(),
        "built platform archive"
    );
    Ok(artifact)
}

/// Zip every generated platform, each under `{name}-{slug}/`.
pub fn build_bundle(plan: &ArchivePlan) -> Result<Artifact, GeneratorError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for files in plan.file_sets() {
        let folder = format!("{}-{}", plan.folder_name(), files.platform().slug());
        add_folder(&mut zip, &folder, files)?;
    }
    let bytes = zip.finish()?.into_inner();

    let artifact = Artifact {
        file_name: plan.bundle_name(),
        bytes,
    };
    tracing::info!(file = %artifact.file_name, bytes = artifact.bytes.len(), "built bundle");
    Ok(artifact)
}

fn add_folder(zip: &mut Zip, folder: &str, files: &FileSet) -> Result<(), GeneratorError> {
    let text = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);
    // Images are already compressed
    let binary = FileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(0o644);

    zip.add_directory(format!("{}/", folder), text)?;

    for (path, content) in files.iter() {
        let options = if content.is_binary() { binary } else { text };
        zip.start_file(format!("{}/{}", folder, path), options)?;
        zip.write_all(content.as_bytes())
            .map_err(|e| GeneratorError::ArchiveBuild(format!("{}: {}", path, e)))?;
    }

    Ok(())
}

/// Write a FileSet below `output_dir`, creating parent directories.
pub fn write_directory(files: &FileSet, output_dir: &Path) -> Result<(), GeneratorError> {
    fs::create_dir_all(output_dir).map_err(|e| GeneratorError::io(output_dir, e))?;

    for (path, content) in files.iter() {
        let relative = Path::new(path);
        if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(GeneratorError::ArchiveBuild(format!(
                "refusing to write {} outside {}",
                path,
                output_dir.display()
            )));
        }

        let target = output_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }
        fs::write(&target, content.as_bytes()).map_err(|e| GeneratorError::io(&target, e))?;
        tracing::debug!(path = %target.display(), "wrote file");
    }

    Ok(())
}

/// Save an artifact into `output_dir` under its own file name.
pub fn write_artifact(artifact: &Artifact, output_dir: &Path) -> Result<std::path::PathBuf, GeneratorError> {
    fs::create_dir_all(output_dir).map_err(|e| GeneratorError::io(output_dir, e))?;
    let target = output_dir.join(&artifact.file_name);
    fs::write(&target, &artifact.bytes).map_err(|e| GeneratorError::io(&target, e))?;
    Ok(target)
}
