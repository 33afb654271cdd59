//! External strip-tool plumbing: program resolution, shared-library
//! detection, and per-file strip runs with before/after sizes.

pub use command::Command;
pub use error::{Error, Result};
pub use strip::{StripOutcome, Stripper, is_shared_library};

pub mod command;
mod error;
pub mod strip;
