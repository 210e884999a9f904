// Re-export all items from the submodules
mod dump_config;

pub use dump_config::{DumpConfig, load_or_create_config};
