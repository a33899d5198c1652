use crate::error::{PropzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for propz, stored in the data directory as config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropzConfig {
    /// Path to the property dataset JSON used when --data is not given
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl PropzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PropzError::Io)?;
        let config: PropzConfig =
            serde_json::from_str(&content).map_err(PropzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PropzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PropzError::Serialization)?;
        fs::write(config_path, content).map_err(PropzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_data_file() {
        assert_eq!(PropzConfig::default().data_file, None);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PropzConfig::load(dir.path()).unwrap();
        assert_eq!(config, PropzConfig::default());
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = TempDir::new().unwrap();

        let config = PropzConfig {
            data_file: Some(PathBuf::from("/srv/listings/properties.json")),
        };
        config.save(dir.path()).unwrap();

        let loaded = PropzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_creates_the_config_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("propz");

        PropzConfig::default().save(&nested).unwrap();
        assert!(nested.join("config.json").exists());
    }
}
