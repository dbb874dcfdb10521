//! # Configuration
//!
//! Client settings live in `config.json` inside the data directory. A missing
//! file means defaults; missing keys fall back to their defaults one by one.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `lookup_url` | `https://www.googleapis.com/books/v1/volumes` | Catalog queried by `lookup` |
//! | `remote_url` | `http://localhost:3001` | Base URL of the remote mirror |
//! | `export_dir` | *(unset: current directory)* | Where `export` writes files |

use crate::error::{Result, ScanError};
use crate::lookup::DEFAULT_LOOKUP_URL;
use crate::remote::DEFAULT_REMOTE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lookup_url: default_lookup_url(),
            remote_url: default_remote_url(),
            export_dir: None,
        }
    }
}

impl ScanConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ScanError::Io)?;
        let config: ScanConfig =
            serde_json::from_str(&content).map_err(ScanError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ScanError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ScanError::Serialization)?;
        fs::write(config_path, content).map_err(ScanError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "lookup_url" => Ok(Some(self.lookup_url.clone())),
            "remote_url" => Ok(Some(self.remote_url.clone())),
            "export_dir" => Ok(self.export_dir.as_ref().map(|p| p.display().to_string())),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "lookup_url" => self.lookup_url = value.to_string(),
            "remote_url" => self.remote_url = value.to_string(),
            "export_dir" => {
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["lookup_url", "remote_url", "export_dir"]
    }
}

fn unknown_key(key: &str) -> ScanError {
    ScanError::Store(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        ScanConfig::keys().join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.lookup_url, DEFAULT_LOOKUP_URL);
        assert_eq!(config.remote_url, "http://localhost:3001");
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScanConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScanConfig::default();
        config.set("remote_url", "http://mirror:8080").unwrap();
        config.set("export_dir", "/tmp/exports").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ScanConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.get("export_dir").unwrap().as_deref(),
            Some("/tmp/exports")
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"remote_url": "http://x"}"#).unwrap();
        let loaded = ScanConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.remote_url, "http://x");
        assert_eq!(loaded.lookup_url, DEFAULT_LOOKUP_URL);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = ScanConfig::default();
        assert!(config.set("color", "red").is_err());
        assert!(config.get("color").is_err());
    }

    #[test]
    fn test_empty_export_dir_unsets() {
        let mut config = ScanConfig::default();
        config.set("export_dir", "out").unwrap();
        config.set("export_dir", "").unwrap();
        assert_eq!(config.export_dir, None);
    }
}
