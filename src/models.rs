use std::path::PathBuf;

/// A source file captured during collection: the path it was found under
/// (joined from the traversal root) and its full text contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub contents: String,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct DumpSummary {
    pub files_dumped: usize,
    pub files_skipped: usize,
    pub lines_written: usize,
}
