//! File collection.
//!
//! The collector walks the directory tree depth-first with entries sorted
//! by file name at each level, prunes excluded directories, and reads every
//! file whose extension is on the allow-list. Unreadable files are logged
//! and skipped; the walk itself only fails if the root cannot be enumerated.

/// Tree walk and file reading
pub mod collector;

/// Extension and directory-name filtering helpers
pub mod filters;
