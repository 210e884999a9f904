use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod cli;
mod collectors;
mod config;
mod constants;
mod models;
mod output;

use cli::{Args, Commands};
use collectors::collector::CodeCollector;
use config::{load_or_create_config, DumpConfig};
use models::DumpSummary;
use output::DumpWriter;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    // Handle subcommands
    if let Some(cmd) = &args.command {
        return handle_subcommand(cmd);
    }

    info!("Starting code dump of {}", args.root.display());

    // Load configuration and apply command-line overrides
    let config = load_and_process_config(&args)?;

    // Collect matching files
    let collector = CodeCollector::new(&config);
    let collection = collector.collect(&args.root)?;

    // Write the dump
    let writer = DumpWriter::new(&config.output_file);
    let lines_written = writer.write(&collection.records)?;

    let summary = DumpSummary {
        files_dumped: collection.records.len(),
        files_skipped: collection.skipped,
        lines_written,
    };
    report_summary(&summary, &writer);

    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Handle subcommands (init-config)
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::InitConfig { path } => {
            info!("Creating default configuration file at {}", path.display());
            let config = DumpConfig::default();
            config.save_to_yaml_file(path)?;
            info!("Configuration created successfully");
            Ok(())
        }
    }
}

/// Load configuration and fold in command-line overrides. The result is
/// the immutable configuration value used for the rest of the run.
fn load_and_process_config(args: &Args) -> Result<DumpConfig> {
    let mut config = load_or_create_config(args.config.as_deref())?;

    if let Some(output) = &args.output {
        config.output_file = output.clone();
    }
    if args.no_exclude {
        config.exclude_dirs.clear();
    }

    Ok(config)
}

/// Report run totals and the output file location
fn report_summary(summary: &DumpSummary, writer: &DumpWriter) {
    if summary.files_skipped > 0 {
        info!(
            "Skipped {} unreadable path(s); see warnings above",
            summary.files_skipped
        );
    }
    info!(
        "Dumped {} file(s), {} total output line(s) to {}",
        summary.files_dumped,
        summary.lines_written,
        writer.output_path().display()
    );
}
