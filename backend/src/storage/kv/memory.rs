//! In-process key-value store.
//!
//! Used for sessions that should not outlive the process, for tests, and to
//! model a browser store that is disabled or over quota.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::traits::KeyValueStore;

/// Map-backed store; clones share the same slots
#[derive(Clone)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    available: bool,
    /// Maximum total bytes (keys + values) the store accepts
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            available: true,
            quota_bytes: None,
        }
    }

    /// A store whose every call fails, like storage in a locked-down private window
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// A store that rejects writes once the total stored size would exceed `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::new()
        }
    }

    fn slots(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        if !self.available {
            return Err(anyhow!("storage is not available"));
        }
        self.slots
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots()?;

        if let Some(quota) = self.quota_bytes {
            let used: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(anyhow!("quota of {} bytes exceeded", quota));
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.slots()?.remove(key);
        Ok(())
    }
}
