//! `window.localStorage` backend for wasm builds.

use anyhow::{anyhow, Result};
use web_sys::Storage;

use crate::storage::traits::KeyValueStore;

/// Browser local storage. Every call fails when there is no `window` or the
/// browser refuses access to `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
        window
            .local_storage()
            .map_err(|e| anyhow!("localStorage access denied: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage is not available"))
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| anyhow!("localStorage read of {} failed: {:?}", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("localStorage write of {} failed: {:?}", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| anyhow!("localStorage remove of {} failed: {:?}", key, e))
    }
}
