use std::collections::HashSet;
use std::path::Path;

use walkdir::DirEntry;

/// Lower-case an allow-list for case-insensitive membership tests
pub fn normalize_extensions(extensions: &[String]) -> HashSet<String> {
    extensions.iter().map(|e| e.to_lowercase()).collect()
}

/// Check whether a file's extension (lower-cased, with the leading dot)
/// is in the allow-list
pub fn has_allowed_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    match path.extension() {
        Some(ext) => {
            let token = format!(".{}", ext.to_string_lossy().to_lowercase());
            extensions.contains(&token)
        }
        None => false,
    }
}

/// Check whether a walk entry is a directory whose name is in the
/// exclusion set. The traversal root itself is never pruned.
pub fn is_excluded_dir(entry: &DirEntry, exclude_dirs: &HashSet<String>) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| exclude_dirs.contains(name))
        .unwrap_or(false)
}
