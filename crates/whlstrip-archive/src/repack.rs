use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};

fn repack_err(archive_path: &Path, source: io::Error) -> Error {
    Error::RepackFailed {
        path: archive_path.to_path_buf(),
        source,
    }
}

/// Bundle every file under `root` (recursively, in sorted order) into a
/// deflated zip and atomically replace `archive_path` with it. Returns
/// the size of the new archive.
///
/// The zip is staged as a uniquely named temporary file in the target's
/// parent directory and renamed over the target, so a failure anywhere
/// before the rename leaves the original archive untouched.
pub fn repack_dir(root: &Path, archive_path: &Path) -> Result<u64> {
    let parent = archive_path.parent().ok_or_else(|| {
        repack_err(archive_path, io::Error::other("no parent directory"))
    })?;

    let staged = tempfile::Builder::new()
        .prefix(".whlstrip.")
        .tempfile_in(parent)
        .map_err(|e| repack_err(archive_path, e))?;

    let mut writer = zip::ZipWriter::new(staged);
    let mut count = 0usize;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| repack_err(archive_path, io::Error::other(e)))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| repack_err(archive_path, io::Error::other(e)))?;
        let name = relative.to_string_lossy().replace('\\', "/");

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        #[cfg(unix)]
        let options = {
            use std::os::unix::fs::PermissionsExt;
            let metadata = entry
                .metadata()
                .map_err(|e| repack_err(archive_path, io::Error::other(e)))?;
            options.unix_permissions(metadata.permissions().mode())
        };

        writer
            .start_file(name, options)
            .map_err(|e| repack_err(archive_path, io::Error::other(e)))?;
        let mut source = fs::File::open(entry.path()).map_err(|e| repack_err(archive_path, e))?;
        io::copy(&mut source, &mut writer).map_err(|e| repack_err(archive_path, e))?;
        count += 1;
    }

    if count == 0 {
        return Err(repack_err(
            archive_path,
            io::Error::other("no files to repack"),
        ));
    }

    let staged = writer
        .finish()
        .map_err(|e| repack_err(archive_path, io::Error::other(e)))?;
    staged
        .persist(archive_path)
        .map_err(|e| repack_err(archive_path, e.error))?;

    let size = fs::metadata(archive_path)
        .map_err(|e| repack_err(archive_path, e))?
        .len();
    Ok(size)
}
