use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::collectors::filters::{has_allowed_extension, is_excluded_dir, normalize_extensions};
use crate::config::DumpConfig;
use crate::models::FileRecord;

/// The result of one collection pass: the records to dump, in walk order,
/// plus the number of paths that were warned about and skipped (matching
/// files that could not be read, and subdirectories that could not be
/// enumerated).
#[derive(Debug)]
pub struct Collection {
    pub records: Vec<FileRecord>,
    pub skipped: usize,
}

/// Walks a directory tree and gathers the contents of files matching the
/// configured extension allow-list.
pub struct CodeCollector {
    extensions: HashSet<String>,
    exclude_dirs: HashSet<String>,
}

impl CodeCollector {
    pub fn new(config: &DumpConfig) -> Self {
        CodeCollector {
            extensions: normalize_extensions(&config.extensions),
            exclude_dirs: config.exclude_dirs.iter().cloned().collect(),
        }
    }

    /// Walk the tree rooted at `root` and read every matching file.
    ///
    /// Entries are visited depth-first, sorted by file name at each level,
    /// so repeated runs over an unchanged tree produce identical ordering.
    /// Directories whose name is in the exclusion set are pruned together
    /// with their whole subtree. A matching file that cannot be read as
    /// UTF-8 text is logged and skipped; a root that cannot be enumerated
    /// is an error.
    pub fn collect(&self, root: &Path) -> Result<Collection> {
        let mut records = Vec::new();
        let mut skipped = 0;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let excluded = is_excluded_dir(entry, &self.exclude_dirs);
                if excluded {
                    debug!("Pruning excluded directory: {}", entry.path().display());
                }
                !excluded
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 {
                        return Err(anyhow::Error::new(err)
                            .context(format!("Failed to walk {}", root.display())));
                    }
                    // Unreadable subdirectory: note it and keep going
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    warn!("Skipping {}: {}", path, err);
                    skipped += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if !has_allowed_extension(entry.path(), &self.extensions) {
                continue;
            }

            match fs::read_to_string(entry.path()) {
                Ok(contents) => {
                    debug!("Collected {}", entry.path().display());
                    records.push(FileRecord {
                        path: entry.path().to_path_buf(),
                        contents,
                    });
                }
                Err(err) => {
                    warn!("Skipping {}: {}", entry.path().display(), err);
                    skipped += 1;
                }
            }
        }

        Ok(Collection { records, skipped })
    }
}
