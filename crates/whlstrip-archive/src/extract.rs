use std::fs;
use std::io::{Read, Seek};
use std::path::Path;

use crate::entry::{Entry, ExtractReport};
use crate::error::{Error, Result};
use crate::sanitize::sanitize_entry_path;

/// Extract every member of a wheel archive under `dest`, preserving
/// relative paths, directory structure, and unix modes where present.
pub fn extract_wheel<R: Read + Seek>(reader: R, dest: &Path) -> Result<ExtractReport> {
    let mut archive = zip::ZipArchive::new(reader).map_err(|_| Error::Corrupted)?;

    let mut entries = Vec::new();
    let mut total_bytes = 0u64;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(|_| Error::Corrupted)?;

        let raw_path = file.enclosed_name().ok_or(Error::InvalidPath)?;
        let resolved = sanitize_entry_path(&raw_path, dest)?;

        if file.is_dir() {
            if !resolved.exists() {
                fs::create_dir_all(&resolved).map_err(|e| Error::DirectoryCreationFailed {
                    path: resolved.clone(),
                    source: e,
                })?;
            }
            continue;
        }

        if let Some(parent) = resolved.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut out = fs::File::create(&resolved).map_err(|e| Error::ExtractionFailed {
            path: resolved.clone(),
            source: e,
        })?;
        let copied = std::io::copy(&mut file, &mut out).map_err(|e| Error::ExtractionFailed {
            path: resolved.clone(),
            source: e,
        })?;

        let mode = file.unix_mode();
        #[cfg(unix)]
        if let Some(mode) = mode {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&resolved, fs::Permissions::from_mode(mode))?;
        }

        let relative = resolved
            .strip_prefix(dest)
            .map(|p| p.to_path_buf())
            .unwrap_or(raw_path);

        total_bytes += copied;
        entries.push(Entry {
            path: relative,
            size: copied,
            mode,
        });
    }

    Ok(ExtractReport {
        entry_count: entries.len(),
        total_bytes,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn garbage_input_is_corrupted() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_wheel(Cursor::new(data), temp_dir.path());
        assert!(matches!(result, Err(Error::Corrupted)));
    }

    #[test]
    fn empty_archive_yields_empty_report() {
        let writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let data = writer.finish().unwrap().into_inner();
        let temp_dir = tempfile::tempdir().unwrap();
        let report = extract_wheel(Cursor::new(data), temp_dir.path()).unwrap();
        assert_eq!(report.entry_count, 0);
        assert_eq!(report.total_bytes, 0);
    }
}
