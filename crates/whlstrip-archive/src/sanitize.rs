use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Normalize an archive entry path and resolve it against the extraction
/// base, rejecting absolute entries and anything escaping the base.
pub fn sanitize_entry_path<P: AsRef<Path>, B: AsRef<Path>>(entry: P, base: B) -> Result<PathBuf> {
    let entry = entry.as_ref();
    let base = base.as_ref();
    let normalized = normalize_path(entry);

    // Reject absolute paths (zip-slip protection)
    if normalized.is_absolute() {
        return Err(Error::ZipSlip {
            entry: entry.to_path_buf(),
            resolved: normalized,
        });
    }

    let resolved = normalize_path(&base.join(normalized));

    // Ensure result doesn't escape base directory
    if !resolved.starts_with(base) {
        return Err(Error::ZipSlip {
            entry: entry.to_path_buf(),
            resolved,
        });
    }

    Ok(resolved)
}

/// Normalize path separators and resolve relative components.
fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
            Component::RootDir => result.push("/"),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {}
        }
    }

    result
}
