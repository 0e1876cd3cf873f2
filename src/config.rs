// Configuration loaded from an optional YAML file

use crate::store::DEFAULT_STORAGE_KEY;
use crate::transfer::EXPORT_FILE_NAME;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the task list is persisted under
    pub storage_key: String,
    /// Default destination for `export`
    pub export_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file: PathBuf::from(EXPORT_FILE_NAME),
        }
    }
}

impl Config {
    /// Load from an explicit YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))?;

        debug!(file = ?path, "Loaded config");
        Ok(config)
    }

    /// Load `config.yaml` from `dir` when it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!(file = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "todo_app.todos");
        assert_eq!(config.export_file, PathBuf::from("todos.md"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::load_or_default(temp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "storage_key: work.todos\n").unwrap();

        let config = Config::load_or_default(temp.path()).unwrap();
        assert_eq!(config.storage_key, "work.todos");
        assert_eq!(config.export_file, PathBuf::from("todos.md"));
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "storage_key: [unterminated\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(temp.path().join("nope.yaml")).is_err());
    }
}
