//! # App Configuration
//!
//! Optional read-only YAML configuration for the pricer window.
//!
//! The file lives at `<config dir>/nexusoft-pricer/config.yaml`. Every field is
//! optional; a missing file gives the built-in defaults and a malformed file is
//! logged and ignored. User edits made in the window are never written back.
//!
//! ```yaml
//! language: pt
//! export_dir: ~/Documents/pricing
//! export_format: csv
//! timestamp_filenames: true
//! defaults:
//!   max_income: 250000
//!   months: 24
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::{Language, PricingParameters, ReportFormat};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "nexusoft-pricer";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Startup configuration for the pricer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language shown on startup
    pub language: Language,
    /// Directory for exported reports. Defaults to the Documents folder.
    pub export_dir: Option<String>,
    /// Format preselected in the export panel
    pub export_format: ReportFormat,
    /// Append `_YYYYMMDD` to exported file names
    pub timestamp_filenames: bool,
    /// Parameters the calculator starts with
    pub defaults: PricingParameters,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            export_dir: None,
            export_format: ReportFormat::default(),
            timestamp_filenames: false,
            defaults: PricingParameters::default(),
        }
    }
}

impl AppConfig {
    /// Default location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            info!("⚙️ CONFIG: No config directory on this platform, using defaults");
            return Self::default();
        };

        if !path.exists() {
            info!("⚙️ CONFIG: No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                info!("✅ CONFIG: Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                warn!("⚠️ CONFIG: {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit rather than an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::parse("language: pt\ndefaults:\n  months: 24\n").unwrap();

        assert_eq!(config.language, Language::Pt);
        assert_eq!(config.defaults.months, 24);
        assert_eq!(config.defaults.max_income, 100_000.0);
        assert_eq!(config.export_format, ReportFormat::Text);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::parse("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_unsupported_language_is_rejected() {
        assert!(AppConfig::parse("language: fr\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "export_format: json").unwrap();
        writeln!(file, "timestamp_filenames: true").unwrap();
        writeln!(file, "export_dir: /tmp/reports").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.export_format, ReportFormat::Json);
        assert!(config.timestamp_filenames);
        assert_eq!(config.export_dir.as_deref(), Some("/tmp/reports"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "defaults: not-a-mapping").unwrap();

        let result = AppConfig::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
