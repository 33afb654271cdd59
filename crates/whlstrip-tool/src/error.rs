use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("strip program '{program}' not found")]
    ToolNotFound { program: String },

    #[error("failed to run '{cmd}': {source}")]
    CommandFailed { cmd: String, source: io::Error },

    #[error("strip tool failed on '{path}' ({status}): {stderr}")]
    StripFailed {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
