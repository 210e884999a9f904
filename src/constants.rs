//! Global constants for the code-dump application.
//!
//! This module centralizes the compiled-in defaults so that configuration
//! changes stay in one place.

/// Default name of the dump file, created in the current working directory
pub const DEFAULT_OUTPUT_FILE: &str = "all_code_dump.txt";

/// File extensions eligible for inclusion, compared case-insensitively
/// and including the leading dot
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".py", ".html", ".css", ".json",
];

/// Directory names pruned during traversal.
///
/// The final entry is a filename rather than a directory name and never
/// matches during pruning; it is kept as-is for compatibility with
/// existing configuration files (see DESIGN.md).
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".venv",
    "__pycache__",
    "dump_all_files.py",
];
