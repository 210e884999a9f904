use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the code-dump tool.
///
/// All filtering behavior comes from the configuration (compiled-in defaults
/// or a YAML file); the flags here only select the root, the output file,
/// and whether directory exclusion applies.
#[derive(Parser, Debug)]
#[clap(name = "code-dump", about = "Recursively concatenate source files into one dump file")]
pub struct Args {
    /// Root directory to walk (default: current working directory)
    #[clap(default_value = ".")]
    pub root: PathBuf,

    /// Output filename, overriding the configured value
    #[clap(short, long)]
    pub output: Option<String>,

    /// Path to configuration YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Walk everything, including dependency and version-control directories
    #[clap(long)]
    pub no_exclude: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration to a YAML file
    InitConfig {
        /// Where to write the configuration file
        #[clap(default_value = "code_dump.yaml")]
        path: PathBuf,
    },
}
