use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT_FILE};

/// Immutable run configuration: the extension allow-list, the directory
/// exclusion set, and the output filename.
///
/// Constructed once at startup (from compiled-in defaults or a YAML file,
/// plus command-line overrides) and passed by reference into the collector
/// and the writer. Nothing mutates it after that point.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DumpConfig {
    /// Eligible file extensions, each including the leading dot.
    /// Matching is case-insensitive.
    pub extensions: Vec<String>,
    /// Directory names whose whole subtree is skipped during traversal
    pub exclude_dirs: Vec<String>,
    /// Name of the dump file to write
    pub output_file: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        DumpConfig {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl DumpConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: DumpConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml)
            .context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

/// Load the configuration from the given path, creating it with default
/// contents if it does not exist yet. With no path, the compiled-in
/// defaults are used directly.
pub fn load_or_create_config(config_path: Option<&Path>) -> Result<DumpConfig> {
    match config_path {
        Some(path) => {
            if path.exists() {
                DumpConfig::from_yaml_file(path)
            } else {
                info!("Creating default config at {}", path.display());
                let default_config = DumpConfig::default();
                default_config.save_to_yaml_file(path)?;
                Ok(default_config)
            }
        }
        None => Ok(DumpConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_contents() {
        let config = DumpConfig::default();

        assert_eq!(config.output_file, "all_code_dump.txt");
        assert!(config.extensions.iter().any(|e| e == ".py"));
        assert!(config.extensions.iter().any(|e| e == ".tsx"));
        assert!(config.exclude_dirs.iter().any(|d| d == "node_modules"));
        // Inert filename entry is preserved verbatim
        assert!(config.exclude_dirs.iter().any(|d| d == "dump_all_files.py"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = DumpConfig {
            extensions: vec![".rs".to_string()],
            exclude_dirs: vec!["target".to_string()],
            output_file: "dump.txt".to_string(),
        };
        config.save_to_yaml_file(&config_path).unwrap();

        let loaded = DumpConfig::from_yaml_file(&config_path).unwrap();
        assert_eq!(loaded.extensions, config.extensions);
        assert_eq!(loaded.exclude_dirs, config.exclude_dirs);
        assert_eq!(loaded.output_file, config.output_file);
    }

    #[test]
    fn test_load_or_create_config_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("existing.yaml");

        let config = DumpConfig {
            extensions: vec![".md".to_string()],
            exclude_dirs: vec![],
            output_file: "out.txt".to_string(),
        };
        config.save_to_yaml_file(&config_path).unwrap();

        let loaded = load_or_create_config(Some(&config_path)).unwrap();
        assert_eq!(loaded.extensions, vec![".md".to_string()]);
    }

    #[test]
    fn test_load_or_create_config_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("new.yaml");

        let loaded = load_or_create_config(Some(&config_path)).unwrap();

        // File was created on disk with the defaults
        assert!(config_path.exists());
        assert_eq!(loaded.output_file, DumpConfig::default().output_file);
    }

    #[test]
    fn test_load_or_create_config_no_path() {
        let loaded = load_or_create_config(None).unwrap();
        assert_eq!(loaded.extensions, DumpConfig::default().extensions);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "extensions: [unclosed").unwrap();

        assert!(DumpConfig::from_yaml_file(&config_path).is_err());
    }
}
