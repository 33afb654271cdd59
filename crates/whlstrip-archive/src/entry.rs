use std::path::PathBuf;

/// A file written under the scratch root during extraction.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Path relative to the scratch root.
    pub path: PathBuf,
    pub size: u64,
    pub mode: Option<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct ExtractReport {
    pub entry_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<Entry>,
}
