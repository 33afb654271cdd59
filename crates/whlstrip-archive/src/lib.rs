//! Wheel archive plumbing for whlstrip.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Entry path sanitization (zip-slip prevention)
//! - `scratch.rs` - Scoped scratch directory
//! - `extract.rs` - Wheel extraction
//! - `repack.rs` - Deterministic repacking with atomic replacement
//! - `entry.rs` - Shared types

pub use entry::{Entry, ExtractReport};
pub use error::{Error, Result};
pub use extract::extract_wheel;
pub use repack::repack_dir;
pub use sanitize::sanitize_entry_path;
pub use scratch::Scratch;

pub mod entry;
mod error;
pub mod extract;
pub mod repack;
mod sanitize;
mod scratch;
