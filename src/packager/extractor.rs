//! Reading built archives back into memory

use crate::models::GeneratorError;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Sizes in entry headers are untrusted; reads beyond this grow on demand.
const MAX_PREALLOCATION: u64 = 1024 * 1024;

/// Every file entry of a zip, keyed by its full entry name.
pub fn read_archive(bytes: &[u8]) -> Result<BTreeMap<String, Vec<u8>>, GeneratorError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut files = BTreeMap::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if !entry.is_file() {
            continue;
        }

        let mut content = Vec::with_capacity(entry.size().min(MAX_PREALLOCATION) as usize);
        entry
            .read_to_end(&mut content)
            .map_err(|e| GeneratorError::ArchiveBuild(format!("{}: {}", entry.name(), e)))?;
        files.insert(entry.name().to_string(), content);
    }

    Ok(files)
}

/// Top-level folder names present in a zip, in entry order.
pub fn archive_folders(bytes: &[u8]) -> Result<Vec<String>, GeneratorError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut folders: Vec<String> = Vec::new();

    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if let Some((folder, _)) = entry.name().split_once('/') {
            if !folders.iter().any(|known| known == folder) {
                folders.push(folder.to_string());
            }
        }
    }

    Ok(folders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileContent, FileSet, TargetPlatform};
    use crate::packager::{build_bundle, build_platform_archive, ArchivePlan};

    #[test]
    fn test_platform_archive_has_one_folder() {
        let mut files = FileSet::new(TargetPlatform::Firefox);
        files.insert("manifest.json", "{\"manifest_version\": 2}");
        files.insert("icon128.png", FileContent::Binary(vec![0, 159, 146, 150]));
        let plan = ArchivePlan::new("Demo", vec![files]);

        let artifact = build_platform_archive(&plan, TargetPlatform::Firefox).unwrap();
        let entries = read_archive(&artifact.bytes).unwrap();

        assert_eq!(archive_folders(&artifact.bytes).unwrap(), vec!["Demo"]);
        assert_eq!(entries["Demo/manifest.json"], b"{\"manifest_version\": 2}".to_vec());
        assert_eq!(entries["Demo/icon128.png"], vec![0, 159, 146, 150]);
    }

    #[test]
    fn test_bundle_has_folder_per_platform() {
        let plan = ArchivePlan::new(
            "Demo",
            vec![
                FileSet::new(TargetPlatform::Chromium),
                FileSet::new(TargetPlatform::Firefox),
            ],
        );
        let artifact = build_bundle(&plan).unwrap();
        assert_eq!(
            archive_folders(&artifact.bytes).unwrap(),
            vec!["Demo-chrome", "Demo-firefox"]
        );
    }

    #[test]
    fn test_oversized_header_does_not_drive_allocation() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        zip.start_file("Demo/notes.txt", options).unwrap();
        std::io::Write::write_all(&mut zip, b"hello").unwrap();
        let mut bytes = zip.finish().unwrap().into_inner();

        // Central directory entry: uncompressed size sits 24 bytes after the signature
        let header = bytes
            .windows(4)
            .position(|window| window == b"PK\x01\x02")
            .unwrap();
        bytes[header + 24..header + 28].copy_from_slice(&0xFFFF_FFF0u32.to_le_bytes());

        let entries = read_archive(&bytes).unwrap();
        assert_eq!(entries["Demo/notes.txt"], b"hello".to_vec());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            read_archive(b"definitely not a zip"),
            Err(GeneratorError::ArchiveBuild(_))
        ));
    }
}
