//! Dump serialization.
//!
//! The writer renders every collected record as a header block followed by
//! the file's raw contents and writes the whole dump in a single pass,
//! truncating any previous file of the same name. There is no atomic
//! rename; a failed write can leave a partial file behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::models::FileRecord;

/// Header marker emitted before each file's contents: two blank lines,
/// the `--- FILE: <path> ---` line, and a trailing newline.
pub fn render_header(path: &Path) -> String {
    format!("\n\n--- FILE: {} ---\n", path.display())
}

/// Serializes collected records to the dump file.
pub struct DumpWriter {
    output_path: PathBuf,
}

impl DumpWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        DumpWriter {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write all records in order, overwriting any existing dump.
    /// Returns the total number of output lines, counting header and
    /// separator lines as well as file content.
    pub fn write(&self, records: &[FileRecord]) -> Result<usize> {
        let rendered = render_dump(records);

        fs::write(&self.output_path, &rendered).context(format!(
            "Failed to write dump file: {}",
            self.output_path.display()
        ))?;

        debug!(
            "Wrote {} bytes to {}",
            rendered.len(),
            self.output_path.display()
        );
        Ok(rendered.lines().count())
    }
}

fn render_dump(records: &[FileRecord]) -> String {
    let mut buffer = String::new();
    for record in records {
        buffer.push_str(&render_header(&record.path));
        buffer.push_str(&record.contents);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(path: &str, contents: &str) -> FileRecord {
        FileRecord {
            path: PathBuf::from(path),
            contents: contents.to_string(),
        }
    }

    #[test]
    fn test_header_format() {
        assert_eq!(
            render_header(Path::new("./a.py")),
            "\n\n--- FILE: ./a.py ---\n"
        );
    }

    #[test]
    fn test_write_single_record() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dump.txt");

        let writer = DumpWriter::new(&out);
        writer.write(&[record("./a.py", "x=1\n")]).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "\n\n--- FILE: ./a.py ---\nx=1\n");
    }

    #[test]
    fn test_write_counts_total_output_lines() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dump.txt");

        // Two blank separator lines, one header line, one content line
        let lines = DumpWriter::new(&out)
            .write(&[record("./a.py", "x=1\n")])
            .unwrap();
        assert_eq!(lines, 4);
    }

    #[test]
    fn test_write_preserves_record_order_and_contents() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dump.txt");

        let records = vec![
            record("one.js", "first();\nsecond();\n"),
            record("two.css", "body { margin: 0; }\n"),
        ];
        DumpWriter::new(&out).write(&records).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let one = written.find("--- FILE: one.js ---").unwrap();
        let two = written.find("--- FILE: two.css ---").unwrap();
        assert!(one < two);
        assert!(written.contains("first();\nsecond();\n"));
        assert!(written.contains("body { margin: 0; }\n"));
    }

    #[test]
    fn test_write_truncates_previous_dump() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dump.txt");
        fs::write(&out, "stale contents that should disappear").unwrap();

        DumpWriter::new(&out).write(&[record("a.py", "x=1\n")]).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(!written.contains("stale"));
        assert_eq!(written, "\n\n--- FILE: a.py ---\nx=1\n");
    }

    #[test]
    fn test_write_empty_collection_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dump.txt");

        let lines = DumpWriter::new(&out).write(&[]).unwrap();

        assert_eq!(lines, 0);
        assert_eq!(fs::read_to_string(&out).unwrap(), "");
    }

    #[test]
    fn test_write_to_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("no_such_dir").join("dump.txt");

        assert!(DumpWriter::new(&out).write(&[record("a.py", "x=1\n")]).is_err());
    }
}
