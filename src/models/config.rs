//! Tool configuration (`upgrade-notes.toml`)

use super::version::{VersionScheme, DEFAULT_VENDOR_TAG};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "upgrade-notes.toml";

/// Errors that can occur when loading or saving the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Vendor tag used in version markers (`1.34.1-<tag>.1431000`)
    #[serde(default = "default_vendor_tag")]
    pub vendor_tag: String,

    /// Local release notes document served when a tool call gives no path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<PathBuf>,
}

fn default_vendor_tag() -> String {
    DEFAULT_VENDOR_TAG.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            vendor_tag: default_vendor_tag(),
            release_notes: None,
        }
    }
}

impl NotesConfig {
    /// Load config from `path`, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to `path`
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn scheme(&self) -> VersionScheme {
        VersionScheme::new(self.vendor_tag.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = NotesConfig::load(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, NotesConfig::default());
        assert_eq!(config.scheme().tag(), "gke");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "release_notes = \"notes.txt\"\n").unwrap();

        let config = NotesConfig::load(&path).unwrap();
        assert_eq!(config.vendor_tag, "gke");
        assert_eq!(config.release_notes, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = NotesConfig {
            vendor_tag: "eks".to_string(),
            release_notes: Some(PathBuf::from("/tmp/notes.txt")),
        };

        config.save(&path).unwrap();
        assert_eq!(NotesConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "vendor_tag = [").unwrap();

        let err = NotesConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
