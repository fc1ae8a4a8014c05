//! Test utilities for automatic cleanup and consistent test infrastructure
//!
//! Temp directories are removed when the [`TestEnvironment`] is dropped,
//! even if the test panics.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::json_slot::JsonSlotStore;
use super::kv::FileStore;

/// Route `log` output through the test harness; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// RAII test environment backed by a fresh temp directory
pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub store: FileStore,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        init_test_logging();
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let store = FileStore::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            store,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Slot adapter over this environment's file store
    pub fn slots(&self) -> JsonSlotStore {
        JsonSlotStore::new(Arc::new(self.store.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;

        {
            let env = TestEnvironment::new()?;
            base_path = env.base_directory().to_path_buf();
            assert!(base_path.exists());

            std::fs::write(base_path.join("test_file.txt"), "test data")?;
            assert!(base_path.join("test_file.txt").exists());
        }

        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_slots_write_into_base_directory() -> Result<()> {
        let env = TestEnvironment::new()?;

        assert!(env.slots().save("archery.athletes.v2", &Vec::<String>::new()));
        assert!(env.base_directory().join("archery.athletes.v2.json").exists());

        Ok(())
    }
}
