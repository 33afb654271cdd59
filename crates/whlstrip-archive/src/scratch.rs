use std::path::Path;

use crate::error::Result;

/// Exclusively owned scratch directory for one strip operation.
///
/// The directory is freshly created with a unique name and removed
/// recursively when the value is dropped, which covers early returns
/// and panic unwinding.
pub struct Scratch(tempfile::TempDir);

impl Scratch {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("whlstrip-").tempdir()?;
        Ok(Self(dir))
    }

    pub fn path(&self) -> &Path {
        self.0.path()
    }

    /// Remove the directory now, surfacing the io error instead of
    /// swallowing it in drop.
    pub fn close(self) -> Result<()> {
        self.0.close()?;
        Ok(())
    }
}
