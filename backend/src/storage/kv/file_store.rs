//! # File Store
//!
//! Directory-backed key-value store for native builds. Each slot lives in its
//! own `<key>.json` file under the data directory:
//!
//! ```text
//! data/
//! ├── journal_config.yaml
//! ├── archery.athletes.v1.json
//! ├── archery.athletes.v2.json
//! └── archery.sessions.v1.json   (only with session persistence enabled)
//! ```
//!
//! Writes go through a temp file and a rename so a crash never leaves a
//! half-written slot behind.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::storage::traits::KeyValueStore;

/// FileStore maps slot keys to JSON files inside a base directory
#[derive(Clone, Debug)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Create a new file store, creating the base directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file backing a slot.
    /// Keys are restricted to a filesystem-safe alphabet so they cannot escape the base directory.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(anyhow!("Invalid storage key: {:?}", key));
        }
        Ok(self.base_directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        // Atomic write using temp file
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved slot {} to {}", key, path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}
