use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::command::Command;
use crate::error::{Error, Result};

/// Shared-library naming convention: plain and versioned ELF objects,
/// Mach-O dylibs, and Windows Python extension modules.
pub fn is_shared_library(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.ends_with(".so") || name.ends_with(".dylib") || name.ends_with(".pyd") {
        return true;
    }
    // versioned suffix such as libpq.so.5.16
    if let Some((stem, version)) = name.split_once(".so.") {
        return !stem.is_empty()
            && !version.is_empty()
            && version.split('.').all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
    }
    false
}

/// Size of one shared library before and after stripping.
#[derive(Clone, Debug)]
pub struct StripOutcome {
    pub path: PathBuf,
    pub before: u64,
    pub after: u64,
}

impl StripOutcome {
    pub fn saved(&self) -> u64 {
        self.before.saturating_sub(self.after)
    }
}

/// Runs the external strip tool against shared libraries, forwarding a
/// fixed set of extra flags verbatim on every invocation.
#[derive(Clone, Debug)]
pub struct Stripper {
    program: PathBuf,
    extra_args: Vec<String>,
}

impl Stripper {
    pub const DEFAULT_PROGRAM: &'static str = "strip";

    /// Locate `program` (in `PATH`, or directly when given as a path)
    /// and build a stripper around it.
    pub fn resolve(program: &str, extra_args: Vec<String>) -> Result<Self> {
        let program = which::which(program).map_err(|_| Error::ToolNotFound {
            program: program.to_string(),
        })?;
        Ok(Self {
            program,
            extra_args,
        })
    }

    /// Strip one file in place. A non-zero tool exit is fatal and
    /// carries the tool's stderr.
    pub fn strip_file(&self, path: &Path) -> Result<StripOutcome> {
        let before = fs::metadata(path)?.len();

        let output = Command::new(&self.program)
            .args(&self.extra_args)
            .arg(path)
            .capture()?;
        if !output.status.success() {
            return Err(Error::StripFailed {
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let after = fs::metadata(path)?.len();
        Ok(StripOutcome {
            path: path.to_path_buf(),
            before,
            after,
        })
    }

    /// Strip every shared library under `root`, stopping fatally on the
    /// first tool failure. Outcome paths are relative to `root`.
    pub fn strip_tree(&self, root: &Path) -> Result<Vec<StripOutcome>> {
        let mut outcomes = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::Io(io::Error::other(e)))?;
            if !entry.file_type().is_file() || !is_shared_library(entry.path()) {
                continue;
            }

            let mut outcome = self.strip_file(entry.path())?;
            if let Ok(relative) = outcome.path.strip_prefix(root) {
                outcome.path = relative.to_path_buf();
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
