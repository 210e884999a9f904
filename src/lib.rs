//! # code-dump
//!
//! A small utility that recursively walks a directory tree, gathers the
//! contents of files matching an extension allow-list, and concatenates
//! them into one output text file with per-file header markers.
//!
//! ## Overview
//!
//! Collection happens in two sequential passes: the collector walks the
//! tree (pruning excluded directories unless disabled) and materializes an
//! ordered list of file records, then the writer serializes that list to
//! the dump file in a single overwrite. Unreadable files are logged and
//! skipped; only root-enumeration and output-write failures abort the run.
//!
//! ## Usage
//!
//! ```no_run
//! use code_dump::config::DumpConfig;
//! use code_dump::collectors::collector::CodeCollector;
//! use code_dump::output::DumpWriter;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = DumpConfig::default();
//!
//! let collection = CodeCollector::new(&config).collect(Path::new("."))?;
//! let writer = DumpWriter::new(&config.output_file);
//! writer.write(&collection.records)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Core data models
//! - [`collectors`]: Directory walk, filtering, and file reading
//! - [`config`]: Configuration management
//! - [`output`]: Dump file serialization
//! - [`constants`]: Compiled-in defaults

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models used throughout the application
pub mod models;

/// Directory walk, filtering, and file-content gathering
pub mod collectors;

/// Configuration management
pub mod config;

/// Dump file serialization
pub mod output;

/// Application constants and compiled-in defaults
pub mod constants;
