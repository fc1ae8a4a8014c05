//! Journal configuration.
//!
//! A small YAML document, every field optional:
//!
//! ```yaml
//! data_directory: /home/coach/archery
//! persist_sessions: true
//! locale: ru
//! show_auto_name_prefix: false
//! data_format_version: "2.0"
//! ```

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Locale, SessionLabels};

/// Points at the config file when no explicit path is given
pub const CONFIG_ENV_VAR: &str = "ARCHERY_JOURNAL_CONFIG";
/// Overrides the data directory when the config does not name one
pub const DATA_DIR_ENV_VAR: &str = "ARCHERY_JOURNAL_DATA_DIR";
pub const DATA_FORMAT_VERSION: &str = "2.0";
const APP_DIRECTORY_NAME: &str = "archery-journal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub data_directory: Option<PathBuf>,
    /// Sessions live in memory only unless this is set
    pub persist_sessions: bool,
    pub locale: Locale,
    pub show_auto_name_prefix: bool,
    pub data_format_version: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_directory: None,
            persist_sessions: false,
            locale: Locale::En,
            show_auto_name_prefix: true,
            data_format_version: DATA_FORMAT_VERSION.to_string(),
        }
    }
}

impl JournalConfig {
    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: JournalConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config
            .check_data_format_version()
            .with_context(|| format!("Unsupported config file {:?}", path))?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Only the current data format is understood
    pub fn check_data_format_version(&self) -> Result<()> {
        if self.data_format_version.trim() != DATA_FORMAT_VERSION {
            bail!(
                "data_format_version {:?} is not supported (expected {:?})",
                self.data_format_version,
                DATA_FORMAT_VERSION
            );
        }
        Ok(())
    }

    /// Config named by `ARCHERY_JOURNAL_CONFIG`, or the defaults
    pub fn load_default() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml_content = serde_yaml::to_string(self)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write config file {:?}", temp_path))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace config file {:?}", path))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Where file-backed slots live: the configured directory, then
    /// `ARCHERY_JOURNAL_DATA_DIR`, then the platform data directory.
    pub fn resolve_data_directory(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_directory {
            return Ok(dir.clone());
        }
        if let Some(dir) = env::var_os(DATA_DIR_ENV_VAR) {
            return Ok(PathBuf::from(dir));
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIRECTORY_NAME))
            .context("Could not determine the platform data directory")
    }

    pub fn session_labels(&self) -> SessionLabels {
        SessionLabels {
            locale: self.locale,
            show_auto_name_prefix: self.show_auto_name_prefix,
        }
    }
}
