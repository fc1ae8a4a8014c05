//! # JSON Slot Store
//!
//! Typed access to named slots of a [`KeyValueStore`]. Every slot holds one
//! JSON document. The adapter never surfaces an error: a missing slot, a
//! document that does not parse, and an unavailable store all read as "no
//! data", and failed writes are logged and reported as `false`.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::traits::KeyValueStore;

/// Infallible JSON view over a key-value store
#[derive(Clone)]
pub struct JsonSlotStore {
    store: Arc<dyn KeyValueStore>,
}

impl JsonSlotStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load and decode a slot. `None` covers absent, malformed and unreadable slots alike.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Slot {} is empty", key);
                return None;
            }
            Err(e) => {
                warn!("Could not read slot {}: {:#}", key, e);
                return None;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed data in slot {}: {}", key, e);
                None
            }
        }
    }

    /// Load a slot, falling back to the type's empty default
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.try_load(key).unwrap_or_default()
    }

    /// Encode and write a slot. Returns false when the write did not happen.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not encode slot {}: {}", key, e);
                return false;
            }
        };

        match self.store.set_item(key, &raw) {
            Ok(()) => {
                debug!("Wrote {} bytes to slot {}", raw.len(), key);
                true
            }
            Err(e) => {
                warn!("Could not write slot {}, keeping data in memory only: {:#}", key, e);
                false
            }
        }
    }
}
